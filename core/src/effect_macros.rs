//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Sequential` emitting each displayable item in order
///
/// # Example
///
/// ```rust
/// use rail_ticketing_core::{effect::Effect, emit_all};
///
/// let effect: Effect = emit_all!(["a", "b"]);
/// assert_eq!(effect.emitted(), vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! emit_all {
    ($items:expr) => {
        $crate::effect::Effect::Sequential(
            ::std::iter::IntoIterator::into_iter($items)
                .map($crate::effect::Effect::emit)
                .collect(),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::effect::Effect;

    #[test]
    fn emit_all_preserves_order() {
        let effect: Effect = emit_all!(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(effect.emitted(), vec!["one", "two"]);
    }

    #[test]
    fn emit_all_of_nothing_is_none() {
        let effect: Effect = emit_all!(Vec::<String>::new());
        assert!(effect.is_none());
    }
}
