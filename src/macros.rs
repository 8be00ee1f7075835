#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `Rule`. `validate` defaults to always-true and `transform` may be
/// omitted for rules that only document a constraint.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, validate: $validate:expr)?
        $(, transform: |$arg:ident : &ParsedName| -> Step $body:block)?
        $(,)?
    ) => {{
        #[allow(unused_mut, unused_assignments)]
        let mut validate: fn(&$crate::ParsedName) -> bool = |_| true;
        $( validate = $validate; )?
        #[allow(unused_mut, unused_assignments)]
        let mut transform: Option<$crate::Transform> = None;
        $( transform = Some(|$arg: &$crate::ParsedName| -> $crate::Step { $body }); )?
        $crate::Rule { name: $name, validate, transform }
    }};
}
