//! The built-in license templates.
//!
//! [`registry`] returns the default [`Registry`] used by the CLI. Templates
//! are registered most-specific-first because registration order settles
//! ties: a template whose text extends another's (Apache with its appendix,
//! MIT with an attribution line) is listed ahead of the shorter form so the
//! longer match wins and nothing is stranded as remainder.

use crate::pattern::Segment;
use crate::registry::{Registry, Template, TemplateError};

/// Build the default registry.
pub fn registry() -> Result<Registry, TemplateError> {
    Registry::builder()
        .register(apache_2_0())
        .register(mit())
        .register(bsd_3_clause())
        .register(bsd_2_clause())
        .register(isc())
        .register(zlib())
        .register(unlicense())
        .register(mpl_2_0())
        .build()
}

const APACHE_PREAMBLE: &str = "Apache License\nVersion 2.0, January 2004";

const APACHE_TERMS: &str = r#"TERMS AND CONDITIONS FOR USE, REPRODUCTION, AND DISTRIBUTION

1. Definitions.

"License" shall mean the terms and conditions for use, reproduction, and
distribution as defined by Sections 1 through 9 of this document.

"Licensor" shall mean the copyright owner or entity authorized by the
copyright owner that is granting the License.

"Legal Entity" shall mean the union of the acting entity and all other
entities that control, are controlled by, or are under common control with
that entity. For the purposes of this definition, "control" means (i) the
power, direct or indirect, to cause the direction or management of such
entity, whether by contract or otherwise, or (ii) ownership of fifty percent
(50%) or more of the outstanding shares, or (iii) beneficial ownership of
such entity.

"You" (or "Your") shall mean an individual or Legal Entity exercising
permissions granted by this License.

"Source" form shall mean the preferred form for making modifications,
including but not limited to software source code, documentation source, and
configuration files.

"Object" form shall mean any form resulting from mechanical transformation
or translation of a Source form, including but not limited to compiled
object code, generated documentation, and conversions to other media types.

"Work" shall mean the work of authorship, whether in Source or Object form,
made available under the License, as indicated by a copyright notice that is
included in or attached to the work (an example is provided in the Appendix
below).

"Derivative Works" shall mean any work, whether in Source or Object form,
that is based on (or derived from) the Work and for which the editorial
revisions, annotations, elaborations, or other modifications represent, as a
whole, an original work of authorship. For the purposes of this License,
Derivative Works shall not include works that remain separable from, or
merely link (or bind by name) to the interfaces of, the Work and Derivative
Works thereof.

"Contribution" shall mean any work of authorship, including the original
version of the Work and any modifications or additions to that Work or
Derivative Works thereof, that is intentionally submitted to Licensor for
inclusion in the Work by the copyright owner or by an individual or Legal
Entity authorized to submit on behalf of the copyright owner. For the
purposes of this definition, "submitted" means any form of electronic,
verbal, or written communication sent to the Licensor or its
representatives, including but not limited to communication on electronic
mailing lists, source code control systems, and issue tracking systems that
are managed by, or on behalf of, the Licensor for the purpose of discussing
and improving the Work, but excluding communication that is conspicuously
marked or otherwise designated in writing by the copyright owner as "Not a
Contribution."

"Contributor" shall mean Licensor and any individual or Legal Entity on
behalf of whom a Contribution has been received by Licensor and subsequently
incorporated within the Work.

2. Grant of Copyright License. Subject to the terms and conditions of this
License, each Contributor hereby grants to You a perpetual, worldwide,
non-exclusive, no-charge, royalty-free, irrevocable copyright license to
reproduce, prepare Derivative Works of, publicly display, publicly perform,
sublicense, and distribute the Work and such Derivative Works in Source or
Object form.

3. Grant of Patent License. Subject to the terms and conditions of this
License, each Contributor hereby grants to You a perpetual, worldwide,
non-exclusive, no-charge, royalty-free, irrevocable (except as stated in
this section) patent license to make, have made, use, offer to sell, sell,
import, and otherwise transfer the Work, where such license applies only to
those patent claims licensable by such Contributor that are necessarily
infringed by their Contribution(s) alone or by combination of their
Contribution(s) with the Work to which such Contribution(s) was submitted.
If You institute patent litigation against any entity (including a
cross-claim or counterclaim in a lawsuit) alleging that the Work or a
Contribution incorporated within the Work constitutes direct or contributory
patent infringement, then any patent licenses granted to You under this
License for that Work shall terminate as of the date such litigation is
filed.

4. Redistribution. You may reproduce and distribute copies of the Work or
Derivative Works thereof in any medium, with or without modifications, and
in Source or Object form, provided that You meet the following conditions:

(a) You must give any other recipients of the Work or Derivative Works a
copy of this License; and

(b) You must cause any modified files to carry prominent notices stating
that You changed the files; and

(c) You must retain, in the Source form of any Derivative Works that You
distribute, all copyright, patent, trademark, and attribution notices from
the Source form of the Work, excluding those notices that do not pertain to
any part of the Derivative Works; and

(d) If the Work includes a "NOTICE" text file as part of its distribution,
then any Derivative Works that You distribute must include a readable copy
of the attribution notices contained within such NOTICE file, excluding
those notices that do not pertain to any part of the Derivative Works, in at
least one of the following places: within a NOTICE text file distributed as
part of the Derivative Works; within the Source form or documentation, if
provided along with the Derivative Works; or, within a display generated by
the Derivative Works, if and wherever such third-party notices normally
appear. The contents of the NOTICE file are for informational purposes only
and do not modify the License. You may add Your own attribution notices
within Derivative Works that You distribute, alongside or as an addendum to
the NOTICE text from the Work, provided that such additional attribution
notices cannot be construed as modifying the License.

You may add Your own copyright statement to Your modifications and may
provide additional or different license terms and conditions for use,
reproduction, or distribution of Your modifications, or for any such
Derivative Works as a whole, provided Your use, reproduction, and
distribution of the Work otherwise complies with the conditions stated in
this License.

5. Submission of Contributions. Unless You explicitly state otherwise, any
Contribution intentionally submitted for inclusion in the Work by You to the
Licensor shall be under the terms and conditions of this License, without
any additional terms or conditions. Notwithstanding the above, nothing
herein shall supersede or modify the terms of any separate license agreement
you may have executed with Licensor regarding such Contributions.

6. Trademarks. This License does not grant permission to use the trade
names, trademarks, service marks, or product names of the Licensor, except
as required for reasonable and customary use in describing the origin of the
Work and reproducing the content of the NOTICE file.

7. Disclaimer of Warranty. Unless required by applicable law or agreed to in
writing, Licensor provides the Work (and each Contributor provides its
Contributions) on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
KIND, either express or implied, including, without limitation, any
warranties or conditions of TITLE, NON-INFRINGEMENT, MERCHANTABILITY, or
FITNESS FOR A PARTICULAR PURPOSE. You are solely responsible for determining
the appropriateness of using or redistributing the Work and assume any risks
associated with Your exercise of permissions under this License.

8. Limitation of Liability. In no event and under no legal theory, whether
in tort (including negligence), contract, or otherwise, unless required by
applicable law (such as deliberate and grossly negligent acts) or agreed to
in writing, shall any Contributor be liable to You for damages, including
any direct, indirect, special, incidental, or consequential damages of any
character arising as a result of this License or out of the use or inability
to use the Work (including but not limited to damages for loss of goodwill,
work stoppage, computer failure or malfunction, or any and all other
commercial damages or losses), even if such Contributor has been advised of
the possibility of such damages.

9. Accepting Warranty or Additional Liability. While redistributing the Work
or Derivative Works thereof, You may choose to offer, and charge a fee for,
acceptance of support, warranty, indemnity, or other liability obligations
and/or rights consistent with this License. However, in accepting such
obligations, You may act only on Your own behalf and on Your sole
responsibility, not on behalf of any other Contributor, and only if You
agree to indemnify, defend, and hold each Contributor harmless for any
liability incurred by, or claims asserted against, such Contributor by
reason of your accepting any such warranty or additional liability.

END OF TERMS AND CONDITIONS"#;

const APACHE_APPENDIX: &str = r#"APPENDIX: How to apply the Apache License to your work.

To apply the Apache License to your work, attach the following boilerplate
notice, with the fields enclosed by brackets "[]" replaced with your own
identifying information. (Don't include the brackets!) The text should be
enclosed in the appropriate comment syntax for the file format. We also
recommend that a file or class name and description of purpose be included
on the same "printed page" as the copyright notice for easier identification
within third-party archives."#;

const APACHE_NOTICE_HEAD: &str = r#"Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at"#;

const APACHE_NOTICE_TAIL: &str = r#"Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License."#;

fn apache_2_0() -> Template {
    let header = || {
        Segment::header(&[
            "Apache License",
            "Apache License, Version 2.0",
            "Apache License Version 2.0",
            "Apache License 2.0",
        ])
    };
    // The appendix-bearing variant comes first: the appendixless form is a
    // textual prefix of it.
    Template::new("Apache-2.0", "Apache License 2.0")
        .variant(vec![
            header(),
            Segment::text(APACHE_PREAMBLE),
            Segment::Url,
            Segment::text(APACHE_TERMS),
            Segment::text(APACHE_APPENDIX),
            Segment::Copyright,
            Segment::text(APACHE_NOTICE_HEAD),
            Segment::Url,
            Segment::text(APACHE_NOTICE_TAIL),
        ])
        .variant(vec![
            header(),
            Segment::text(APACHE_PREAMBLE),
            Segment::Url,
            Segment::text(APACHE_TERMS),
        ])
        .variant(vec![
            header(),
            Segment::text(APACHE_NOTICE_HEAD),
            Segment::Url,
            Segment::text(APACHE_NOTICE_TAIL),
        ])
}

const MIT_BODY: &str = r#"Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE."#;

fn mit() -> Template {
    let header = || {
        Segment::header(&[
            "MIT License",
            "MIT License (MIT)",
            "MIT License (Expat)",
        ])
    };
    // Attribution variant first: the plain body is a prefix of it and would
    // otherwise steal the match and strand the attribution line.
    Template::new("MIT", "The MIT License")
        .variant(vec![header(), Segment::text(MIT_BODY), Segment::BasedOn])
        .variant(vec![header(), Segment::text(MIT_BODY)])
}

const BSD_INTRO: &str = "Redistribution and use in source and binary forms, with or without\n\
                         modification, are permitted provided that the following conditions are met:";

const BSD_CLAUSE_SOURCE: &str = "Redistributions of source code must retain the above copyright notice,\n\
                                 this list of conditions and the following disclaimer.";

const BSD_CLAUSE_BINARY: &str = "Redistributions in binary form must reproduce the above copyright notice,\n\
                                 this list of conditions and the following disclaimer in the documentation\n\
                                 and/or other materials provided with the distribution.";

const BSD_CLAUSE_ENDORSE_TAIL: &str = "nor the names of its contributors may be used to endorse or promote\n\
                                       products derived from this software without specific prior written\n\
                                       permission.";

const BSD_DISCLAIMER_MID: &str = r#""AS IS" AND ANY EXPRESS OR IMPLIED
WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF
MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO
EVENT SHALL"#;

const BSD_DISCLAIMER_TAIL: &str = r#"BE LIABLE FOR ANY DIRECT, INDIRECT,
INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA,
OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE,
EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE."#;

/// The shared BSD disclaimer: provider and liable-party names vary.
fn bsd_disclaimer() -> Vec<Segment> {
    vec![
        Segment::text("THIS SOFTWARE IS PROVIDED BY"),
        Segment::FreeText(60),
        Segment::text(BSD_DISCLAIMER_MID),
        Segment::FreeText(60),
        Segment::text(BSD_DISCLAIMER_TAIL),
    ]
}

fn bsd_3_clause_variant(header: Segment, bullets: [&str; 3]) -> Vec<Segment> {
    let mut segments = vec![
        header,
        Segment::text(format!(
            "{BSD_INTRO}\n\n{} {BSD_CLAUSE_SOURCE}\n\n{} {BSD_CLAUSE_BINARY}\n\n{} Neither the name of",
            bullets[0], bullets[1], bullets[2],
        )),
        Segment::FreeText(80),
        Segment::text(BSD_CLAUSE_ENDORSE_TAIL),
    ];
    segments.extend(bsd_disclaimer());
    segments
}

fn bsd_3_clause() -> Template {
    let header = || {
        Segment::header(&[
            "BSD 3-Clause License",
            "3-Clause BSD License",
            "BSD License",
            "New BSD License",
            "Revised BSD License",
            "BSD 3-Clause \"New\" or \"Revised\" License",
        ])
    };
    Template::new("BSD-3-Clause", "BSD 3-Clause License")
        .variant(bsd_3_clause_variant(header(), ["1.", "2.", "3."]))
        .variant(bsd_3_clause_variant(header(), ["*", "*", "*"]))
}

fn bsd_2_clause_variant(header: Segment, bullets: [&str; 2]) -> Vec<Segment> {
    let mut segments = vec![
        header,
        Segment::text(format!(
            "{BSD_INTRO}\n\n{} {BSD_CLAUSE_SOURCE}\n\n{} {BSD_CLAUSE_BINARY}",
            bullets[0], bullets[1],
        )),
    ];
    segments.extend(bsd_disclaimer());
    segments
}

fn bsd_2_clause() -> Template {
    let header = || {
        Segment::header(&[
            "BSD 2-Clause License",
            "2-Clause BSD License",
            "Simplified BSD License",
            "BSD 2-Clause \"Simplified\" License",
            "FreeBSD License",
        ])
    };
    Template::new("BSD-2-Clause", "BSD 2-Clause License")
        .variant(bsd_2_clause_variant(header(), ["1.", "2."]))
        .variant(bsd_2_clause_variant(header(), ["*", "*"]))
}

const ISC_DISCLAIMER_MID: &str = "DISCLAIMS ALL WARRANTIES\n\
                                  WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF\n\
                                  MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL";

const ISC_DISCLAIMER_TAIL: &str = "BE LIABLE FOR\n\
                                   ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES\n\
                                   WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN\n\
                                   ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF\n\
                                   OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.";

fn isc_variant(header: Segment, conjunction: &str) -> Vec<Segment> {
    vec![
        header,
        Segment::text(format!(
            "Permission to use, copy, modify, {conjunction} distribute this software for any\n\
             purpose with or without fee is hereby granted, provided that the above\n\
             copyright notice and this permission notice appear in all copies.\n\n\
             THE SOFTWARE IS PROVIDED \"AS IS\" AND"
        )),
        Segment::FreeText(60),
        Segment::text(ISC_DISCLAIMER_MID),
        Segment::FreeText(60),
        Segment::text(ISC_DISCLAIMER_TAIL),
    ]
}

fn isc() -> Template {
    let header = || Segment::header(&["ISC License", "ISC Licence"]);
    // Modern wording first, the pre-2007 "and distribute" wording second.
    Template::new("ISC", "ISC License")
        .variant(isc_variant(header(), "and/or"))
        .variant(isc_variant(header(), "and"))
}

const ZLIB_BODY: &str = r#"This software is provided 'as-is', without any express or implied
warranty. In no event will the authors be held liable for any damages
arising from the use of this software.

Permission is granted to anyone to use this software for any purpose,
including commercial applications, and to alter it and redistribute it
freely, subject to the following restrictions:

1. The origin of this software must not be misrepresented; you must not
claim that you wrote the original software. If you use this software in a
product, an acknowledgment in the product documentation would be
appreciated but is not required.

2. Altered source versions must be plainly marked as such, and must not be
misrepresented as being the original software.

3. This notice may not be removed or altered from any source distribution."#;

fn zlib() -> Template {
    Template::new("Zlib", "zlib License").variant(vec![
        Segment::header(&["zlib License", "zlib/libpng License"]),
        Segment::text(ZLIB_BODY),
    ])
}

const UNLICENSE_BODY: &str = r#"This is free and unencumbered software released into the public domain.

Anyone is free to copy, modify, publish, use, compile, sell, or distribute
this software, either in source code form or as a compiled binary, for any
purpose, commercial or non-commercial, and by any means.

In jurisdictions that recognize copyright laws, the author or authors of
this software dedicate any and all copyright interest in the software to
the public domain. We make this dedication for the benefit of the public at
large and to the detriment of our heirs and successors. We intend this
dedication to be an overt act of relinquishment in perpetuity of all
present and future rights to this software under copyright law.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN
ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

For more information, please refer to <"#;

fn unlicense() -> Template {
    Template::new("Unlicense", "The Unlicense").variant(vec![
        Segment::header(&["Unlicense", "The Unlicense"]),
        Segment::text(UNLICENSE_BODY),
        Segment::Url,
        Segment::text(">"),
    ])
}

const MPL_NOTICE: &str = "This Source Code Form is subject to the terms of the Mozilla Public\n\
                          License, v. 2.0. If a copy of the MPL was not distributed with this\n\
                          file, You can obtain one at";

fn mpl_2_0() -> Template {
    Template::new("MPL-2.0", "Mozilla Public License 2.0").variant(vec![
        Segment::header(&[
            "Mozilla Public License 2.0",
            "Mozilla Public License Version 2.0",
        ]),
        Segment::text(MPL_NOTICE),
        Segment::Url,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_templates() -> Vec<Template> {
        vec![
            apache_2_0(),
            mit(),
            bsd_3_clause(),
            bsd_2_clause(),
            isc(),
            zlib(),
            unlicense(),
            mpl_2_0(),
        ]
    }

    #[test]
    fn test_registry_builds() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 8);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_ids_in_priority_order() {
        let registry = registry().unwrap();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "Apache-2.0",
                "MIT",
                "BSD-3-Clause",
                "BSD-2-Clause",
                "ISC",
                "Zlib",
                "Unlicense",
                "MPL-2.0",
            ]
        );
    }

    #[test]
    fn test_names_resolve() {
        let registry = registry().unwrap();
        assert_eq!(registry.name_of("Zlib"), Some("zlib License"));
        assert_eq!(registry.name_of("MIT"), Some("The MIT License"));
        assert_eq!(registry.name_of("GPL-3.0"), None);
    }

    // The one test that keeps the whole table honest: every variant's
    // canonical text must classify back to its own template, against the
    // full registry, with nothing left over. A failure here means either a
    // broken pattern or a priority inversion between overlapping templates.
    #[test]
    fn test_every_canonical_variant_classifies_to_itself() {
        let registry = registry().unwrap();
        for template in all_templates() {
            for (index, variant) in template.variants().iter().enumerate() {
                let canonical = variant.canonical();
                let classification = registry.classify(&canonical);
                assert_eq!(
                    classification.matches().len(),
                    1,
                    "{} variant {index}: expected one match, got {:?} with remainder {:?}",
                    template.id(),
                    classification.ids(),
                    classification.remainder(),
                );
                assert_eq!(
                    classification.matches()[0].id,
                    template.id(),
                    "{} variant {index} classified as something else",
                    template.id(),
                );
                assert!(
                    classification.is_fully_matched(),
                    "{} variant {index} left remainder {:?}",
                    template.id(),
                    classification.remainder(),
                );
            }
        }
    }

    #[test]
    fn test_apache_notice_header_matches() {
        let text = "\
Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
";
        let registry = registry().unwrap();
        let classification = registry.classify(text);
        assert_eq!(classification.ids(), vec!["Apache-2.0"]);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_mpl_notice_with_trailing_period() {
        let text = "This Source Code Form is subject to the terms of the Mozilla Public\n\
                    License, v. 2.0. If a copy of the MPL was not distributed with this\n\
                    file, You can obtain one at http://mozilla.org/MPL/2.0/.\n";
        let registry = registry().unwrap();
        let classification = registry.classify(text);
        assert_eq!(classification.ids(), vec!["MPL-2.0"]);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_bsd_2_is_not_mistaken_for_bsd_3() {
        let text = format!(
            "Copyright (c) 2019, Sample Author\n\n{BSD_INTRO}\n\n\
             1. {BSD_CLAUSE_SOURCE}\n\n2. {BSD_CLAUSE_BINARY}\n\n\
             THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS\n\
             {BSD_DISCLAIMER_MID} THE COPYRIGHT HOLDER OR CONTRIBUTORS\n{BSD_DISCLAIMER_TAIL}\n"
        );
        let registry = registry().unwrap();
        let classification = registry.classify(&text);
        assert_eq!(classification.ids(), vec!["BSD-2-Clause"]);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_starred_bullets_match_bsd_3() {
        let text = format!(
            "BSD License\n\nCopyright (c) 2016 The Sample Authors. All rights reserved.\n\n\
             {BSD_INTRO}\n\n* {BSD_CLAUSE_SOURCE}\n\n* {BSD_CLAUSE_BINARY}\n\n\
             * Neither the name of the copyright holder {BSD_CLAUSE_ENDORSE_TAIL}\n\n\
             THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS\n\
             {BSD_DISCLAIMER_MID} THE COPYRIGHT HOLDER OR CONTRIBUTORS\n{BSD_DISCLAIMER_TAIL}\n"
        );
        let registry = registry().unwrap();
        let classification = registry.classify(&text);
        assert_eq!(classification.ids(), vec!["BSD-3-Clause"]);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_old_isc_wording_matches() {
        let text = "\
Copyright (c) 1995-2003 by Internet Software Consortium

Permission to use, copy, modify, and distribute this software for any
purpose with or without fee is hereby granted, provided that the above
copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED \"AS IS\" AND INTERNET SOFTWARE CONSORTIUM DISCLAIMS ALL WARRANTIES
WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL INTERNET SOFTWARE CONSORTIUM BE LIABLE FOR
ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
";
        let registry = registry().unwrap();
        let classification = registry.classify(text);
        assert_eq!(classification.ids(), vec!["ISC"]);
        assert!(classification.is_fully_matched());
    }

    #[test]
    fn test_zlib_with_typographic_quotes() {
        let text = format!(
            "zlib License\n\n{}\n",
            ZLIB_BODY.replace("'as-is'", "\u{2018}as-is\u{2019}")
        );
        let registry = registry().unwrap();
        assert_eq!(registry.classify(&text).ids(), vec!["Zlib"]);
    }

    #[test]
    fn test_unlicense_reference_url() {
        let text = format!("{UNLICENSE_BODY}https://unlicense.org>\n");
        let registry = registry().unwrap();
        let classification = registry.classify(&text);
        assert_eq!(classification.ids(), vec!["Unlicense"]);
        assert!(classification.is_fully_matched());
    }
}
