//! RBI file assembly.
//!
//! Renders merged signature fragments into one declaration file: optional
//! header block, `# typed:` sigil, namespace nesting, and the fragment
//! bodies in their merged order.

use sago_app::TypeKind;
use sago_core::QualifiedName;

use crate::fragment::MethodSignature;

/// Command printed in the header to regenerate a single constant.
const REGENERATE_COMMAND: &str = "sago dsl";

/// Sorbet strictness sigil at the top of every generated file.
const TYPED_SIGIL: &str = "# typed: true";

/// One declaration file under assembly.
pub struct RbiFile {
    name: QualifiedName,
    kind: TypeKind,
    header: bool,
    fragments: Vec<MethodSignature>,
}

impl RbiFile {
    pub fn new(name: QualifiedName, kind: TypeKind, header: bool) -> Self {
        Self {
            name,
            kind,
            header,
            fragments: Vec::new(),
        }
    }

    /// Append a fragment. Callers are responsible for merge order.
    pub fn push(&mut self, signature: MethodSignature) {
        self.fragments.push(signature);
    }

    /// Render the complete file content. No trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.header {
            out.push_str("# DO NOT EDIT MANUALLY\n");
            out.push_str(&format!(
                "# This is an autogenerated file for dynamic methods in `{}`.\n",
                self.name
            ));
            out.push_str(&format!(
                "# Please instead update this file by running `{} {}`.\n\n",
                REGENERATE_COMMAND, self.name
            ));
        }

        out.push_str(TYPED_SIGIL);
        out.push('\n');

        let namespace = self.name.namespace();
        for (depth, segment) in namespace.iter().enumerate() {
            out.push_str(&format!("{}module {}\n", "  ".repeat(depth), segment));
        }

        let depth = namespace.len();
        let keyword = match self.kind {
            TypeKind::Class => "class",
            TypeKind::Module => "module",
        };
        out.push_str(&format!("{}{} {}\n", "  ".repeat(depth), keyword, self.name.leaf()));

        let bodies: Vec<String> = self
            .fragments
            .iter()
            .map(|signature| signature.render(depth + 1))
            .collect();
        out.push_str(&bodies.join("\n\n"));
        out.push('\n');

        for level in (0..=depth).rev() {
            out.push_str(&format!("{}end", "  ".repeat(level)));
            if level > 0 {
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use sago_app::TypeKind;

    use super::*;
    use crate::fragment::Param;

    fn accessor_pair(ty: &str) -> Vec<MethodSignature> {
        vec![
            MethodSignature::instance("title", vec![], ty),
            MethodSignature::instance("title=", vec![Param::new("title", ty)], ty),
        ]
    }

    #[test]
    fn test_render_top_level_class_with_header() {
        let name = QualifiedName::parse("Post").unwrap();
        let mut file = RbiFile::new(name, TypeKind::Class, true);
        for signature in accessor_pair("T.nilable(::String)") {
            file.push(signature);
        }

        let expected = r#"# DO NOT EDIT MANUALLY
# This is an autogenerated file for dynamic methods in `Post`.
# Please instead update this file by running `sago dsl Post`.

# typed: true
class Post
  sig { returns(T.nilable(::String)) }
  def title; end

  sig { params(title: T.nilable(::String)).returns(T.nilable(::String)) }
  def title=(title); end
end"#;
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_render_nested_class_without_header() {
        let name = QualifiedName::parse("Baz::Role").unwrap();
        let mut file = RbiFile::new(name, TypeKind::Class, false);
        for signature in accessor_pair("T.nilable(::String)") {
            file.push(signature);
        }

        let expected = r#"# typed: true
module Baz
  class Role
    sig { returns(T.nilable(::String)) }
    def title; end

    sig { params(title: T.nilable(::String)).returns(T.nilable(::String)) }
    def title=(title); end
  end
end"#;
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_header_suppression_removes_exactly_the_header_lines() {
        let name = QualifiedName::parse("Post").unwrap();

        let mut with_header = RbiFile::new(name.clone(), TypeKind::Class, true);
        let mut without_header = RbiFile::new(name, TypeKind::Class, false);
        for signature in accessor_pair("::String") {
            with_header.push(signature.clone());
            without_header.push(signature);
        }

        let full = with_header.render();
        let stripped = full
            .lines()
            .skip(4)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(without_header.render(), stripped);
    }

    #[test]
    fn test_render_module_keyword() {
        let name = QualifiedName::parse("Helpers").unwrap();
        let mut file = RbiFile::new(name, TypeKind::Module, false);
        file.push(MethodSignature::instance("ready?", vec![], "T::Boolean"));

        let expected = r#"# typed: true
module Helpers
  sig { returns(T::Boolean) }
  def ready?; end
end"#;
        assert_eq!(file.render(), expected);
    }
}
