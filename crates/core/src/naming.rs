use ecamap_api::TypeRef;

/// Separates a generic type's base name from its arity (``List`1``).
pub const ARITY_SEPARATOR: char = '`';

/// Render a type the way it is spelled in source.
///
/// Non-generic types come back unchanged. Generic types lose their arity
/// suffix and get their arguments expanded recursively:
///
/// ```ignore
/// List`1[List`1[Int32]] => "List<List<Int32>>"
/// Dictionary`2[String, Int32] => "Dictionary<String, Int32>"
/// ```
pub fn render_type_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::Generic { name, args } => {
            let args = args
                .iter()
                .map(render_type_name)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}<{}>", strip_arity(name), args)
        }
    }
}

/// Cut the qualified name at the first arity separator, if any.
pub fn strip_arity(name: &str) -> &str {
    name.find(ARITY_SEPARATOR)
        .map(|pos| &name[..pos])
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "System.Collections.Generic.List`1";

    #[test]
    fn test_plain_type_unchanged() {
        assert_eq!(render_type_name(&TypeRef::named("System.Int32")), "System.Int32");
    }

    #[test]
    fn test_nested_generic_expands_each_level() {
        let ty = TypeRef::generic(
            LIST,
            vec![TypeRef::generic(LIST, vec![TypeRef::named("System.Int32")])],
        );
        assert_eq!(
            render_type_name(&ty),
            "System.Collections.Generic.List<System.Collections.Generic.List<System.Int32>>"
        );
    }

    #[test]
    fn test_multiple_arguments_joined_with_comma_space() {
        let ty = TypeRef::generic(
            "System.Collections.Generic.Dictionary`2",
            vec![
                TypeRef::named("System.String"),
                TypeRef::generic(LIST, vec![TypeRef::named("System.Single")]),
            ],
        );
        assert_eq!(
            render_type_name(&ty),
            "System.Collections.Generic.Dictionary<System.String, System.Collections.Generic.List<System.Single>>"
        );
    }

    #[test]
    fn test_strip_arity() {
        assert_eq!(strip_arity("Outer`1"), "Outer");
        assert_eq!(strip_arity("Plain"), "Plain");
    }
}
