//! Sources of the named templates rendered into a new project.
//!
//! The templates are rendered with `trim_blocks`, `lstrip_blocks` and
//! `keep_trailing_newline` enabled, so block tags may sit on their own lines
//! and each file keeps its final newline. The `Copyright` variants end in a
//! newline because they are always included at the end of a line.

pub const COPYRIGHT_PERSONAL: &str = "Copyright {{ year }} {{ author }}\n";

pub const COPYRIGHT_ORG: &str = "Copyright {{ year }} The {{ project }} Authors\n";

pub const COPYLEFT_PERSONAL: &str = "Written in {{ year }} by {{ author }}\n";

pub const COPYLEFT_ORG: &str = "Written in {{ year }} by the {{ project }} Authors\n";

pub const HEADER_APACHE: &str = r#"{{ comment }} {% include "Copyright" %}
{{ comment }}
{{ comment }} Licensed under the Apache License, Version 2.0 (the "License");
{{ comment }} you may not use this file except in compliance with the License.
{{ comment }} You may obtain a copy of the License at
{{ comment }}
{{ comment }}     http://www.apache.org/licenses/LICENSE-2.0
{{ comment }}
{{ comment }} Unless required by applicable law or agreed to in writing, software
{{ comment }} distributed under the License is distributed on an "AS IS" BASIS,
{{ comment }} WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
{{ comment }} See the License for the specific language governing permissions and
{{ comment }} limitations under the License.

"#;

pub const HEADER_GNU: &str = r#"{% set gnu = "GNU " ~ (gnu_extra ~ " " if gnu_extra else "") ~ "General Public License" %}
{{ comment }} {% include "Copyright" %}
{{ comment }}
{{ comment }} This program is free software: you can redistribute it and/or modify
{{ comment }} it under the terms of the {{ gnu }} as published by
{{ comment }} the Free Software Foundation, either version 3 of the License, or
{{ comment }} (at your option) any later version.
{{ comment }}
{{ comment }} This program is distributed in the hope that it will be useful,
{{ comment }} but WITHOUT ANY WARRANTY; without even the implied warranty of
{{ comment }} MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
{{ comment }} {{ gnu }} for more details.
{{ comment }}
{{ comment }} You should have received a copy of the {{ gnu }}
{{ comment }} along with this program.  If not, see <http://www.gnu.org/licenses/>.

"#;

pub const HEADER_MPL: &str = r#"{{ comment }} {% include "Copyright" %}
{{ comment }}
{{ comment }} This Source Code Form is subject to the terms of the Mozilla Public
{{ comment }} License, v. 2.0. If a copy of the MPL was not distributed with this
{{ comment }} file, You can obtain one at http://mozilla.org/MPL/2.0/.

"#;

pub const HEADER_CC0: &str = r#"{{ comment }} {% include "Copyright" %}
{{ comment }}
{{ comment }} To the extent possible under law, the author(s) have dedicated all copyright
{{ comment }} and related and neighboring rights to this software to the public domain
{{ comment }} worldwide. This software is distributed without any warranty.
{{ comment }}
{{ comment }} You should have received a copy of the CC0 Public Domain Dedication along
{{ comment }} with this software. If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.

"#;

pub const HEADER_UNLICENSE: &str = r#"{{ comment }} {% include "Copyright" %}
{{ comment }}
{{ comment }} This is free and unencumbered software released into the public domain.
{{ comment }} For more information, please refer to <http://unlicense.org/>.

"#;

pub const HEADER_NONE: &str = r#"{{ comment }} {% include "Copyright" %}

"#;

pub const GO: &str = r#"{% include "Header" %}
{% if is_cmd %}
// {{ project }} is a command-line program.
package main

func main() {
}
{% else %}
// Package {{ program }} implements {{ project }}.
package {{ program }}
{% if is_cgo %}

// #include <stdlib.h>
import "C"
{% endif %}
{% endif %}
"#;

pub const TEST: &str = r#"{% include "Header" %}
package {{ "main" if is_cmd else program }}

import "testing"

func Test{{ program|title }}(t *testing.T) {
}
"#;

pub const EXAMPLE: &str = r#"{% include "Header" %}
package {{ "main" if is_cmd else program ~ "_test" }}

import "fmt"

func Example() {
	fmt.Println("{{ program }}")
	// Output: {{ program }}
}
"#;

pub const AUTHORS: &str = r#"# This is the official list of {{ project }} authors for copyright purposes.
# This file is distinct from the CONTRIBUTORS file.
# See the latter for an explanation.
#
# Names should be added to this file as:
#	Name or Organization <email address>
#
# The email address is not required for organizations.
#
# Please keep the list sorted.

{% if org %}
{{ org }}
{% else %}
{{ author }}{{ " <" ~ email ~ ">" if email else "" }}
{% endif %}
"#;

pub const CONTRIBUTORS: &str = r#"# This is the official list of people who can contribute
# (and typically have contributed) code to the {{ project }} repository.
# The AUTHORS file lists the copyright holders; this file
# lists people.
#
# Names should be added to this file like so:
#	Name <email address>
#
# Please keep the list sorted.

{% if author %}
{{ author }}{{ " <" ~ email ~ ">" if email else "" }}
{% endif %}
"#;

pub const CHANGELOG: &str = r#"# Changelog of {{ project }}

## Unreleased

* {{ year }}: initial import of {{ program }}.
"#;

pub const README: &str = r#"{{ project }}
{{ project_header }}

{% if is_cmd %}
{{ project }} is a command-line program.
{% else %}
Package {{ program }} is part of {{ project }}.
{% endif %}

{% if import_path %}
## Installation

	go get {{ import_path }}

{% endif %}
## Copyright and licensing

{% if is_copyleft %}
*Written in {{ year }} by the "{{ project }}" Authors*. See file CONTRIBUTORS.
{% else %}
*Copyright {{ year }}  The "{{ project }}" Authors*. See file AUTHORS and CONTRIBUTORS.
{% endif %}

{% if license_faq_url %}
Unless otherwise noted, the source files are distributed under the
*[{{ full_license }}]({{ license_url }})* found in the LICENSE file.
Please read the [FAQ]({{ license_faq_url }}) if you have further questions
regarding the license.
{% else %}
All rights reserved.
{% endif %}

* * *
*Generated by [GoWizard](https://github.com/kless/GoWizard)*
"#;

pub const IGNORE: &str = r#"# Generic
*~
*.swp
.DS_Store

# Go
*.[568vq]
[568vq].out
*.a
*.o
*.so
*.exe
*.test
*.cgo1.go
*.cgo2.c
_cgo_defun.c
_cgo_gotypes.go
_cgo_export.*
_obj/
_test/
_testmain.go
{% if is_cmd %}

# Program
{{ program }}
{% endif %}
"#;

/// Prefix of the ignore file for Mercurial.
pub const HG_SYNTAX: &str = "syntax: glob\n";

pub const USER_CONFIG: &str = r#"[DEFAULT]
org: {{ org }}
author: {{ author }}
email: {{ email }}
license: {{ license }}
vcs: {{ vcs }}
import: {{ import_paths|join(":") }}
"#;
