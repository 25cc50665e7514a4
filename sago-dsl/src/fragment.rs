//! Signature fragments emitted by generators.

/// Method receiver for a generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// Instance method (`def name`).
    Instance,
    /// Class-level method (`def self.name`).
    SelfClass,
}

/// A single parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub sorbet_type: String,
}

impl Param {
    pub fn new(name: impl Into<String>, sorbet_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sorbet_type: sorbet_type.into(),
        }
    }

    /// A parameter with no type information.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, "T.untyped")
    }
}

/// A generated method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub receiver: Receiver,
    pub params: Vec<Param>,
    pub returns: String,
}

impl MethodSignature {
    pub fn instance(name: impl Into<String>, params: Vec<Param>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Instance,
            params,
            returns: returns.into(),
        }
    }

    pub fn class_level(
        name: impl Into<String>,
        params: Vec<Param>,
        returns: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::SelfClass,
            params,
            returns: returns.into(),
        }
    }

    /// Render the `sig` and `def` lines at the given nesting depth.
    pub fn render(&self, depth: usize) -> String {
        let pad = "  ".repeat(depth);
        let sig = if self.params.is_empty() {
            format!("sig {{ returns({}) }}", self.returns)
        } else {
            let params = self
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.sorbet_type))
                .collect::<Vec<_>>()
                .join(", ");
            format!("sig {{ params({}).returns({}) }}", params, self.returns)
        };

        let receiver = match self.receiver {
            Receiver::Instance => "",
            Receiver::SelfClass => "self.",
        };
        let def = if self.params.is_empty() {
            format!("def {}{}; end", receiver, self.name)
        } else {
            let names = self
                .params
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("def {}{}({}); end", receiver, self.name, names)
        };

        format!("{pad}{sig}\n{pad}{def}")
    }
}

/// One unit of declaration content, attributable to a specific type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureFragment {
    /// Fully qualified name of the type the declaration belongs to.
    pub type_name: String,
    pub signature: MethodSignature,
}

impl SignatureFragment {
    pub fn new(type_name: impl Into<String>, signature: MethodSignature) -> Self {
        Self {
            type_name: type_name.into(),
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_getter() {
        let sig = MethodSignature::instance("title", vec![], "T.nilable(::String)");
        assert_eq!(
            sig.render(1),
            "  sig { returns(T.nilable(::String)) }\n  def title; end"
        );
    }

    #[test]
    fn test_render_setter() {
        let sig = MethodSignature::instance(
            "title=",
            vec![Param::new("title", "T.nilable(::String)")],
            "T.nilable(::String)",
        );
        assert_eq!(
            sig.render(2),
            "    sig { params(title: T.nilable(::String)).returns(T.nilable(::String)) }\n    def title=(title); end"
        );
    }

    #[test]
    fn test_render_class_level() {
        let sig = MethodSignature::class_level(
            "perform_async",
            vec![Param::untyped("foo"), Param::untyped("bar")],
            "String",
        );
        assert_eq!(
            sig.render(1),
            "  sig { params(foo: T.untyped, bar: T.untyped).returns(String) }\n  def self.perform_async(foo, bar); end"
        );
    }
}
