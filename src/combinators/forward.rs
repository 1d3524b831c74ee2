//! Late binding for recursive grammars.

use crate::input::Input;
use crate::rule::Rule;
use crate::Parsed;

/// Defers resolving a rule until execution.
///
/// Strict value bindings cannot express `expr = … atom …; atom = … expr …`
/// directly; wrapping one of the references in `Forward(|| …)` (typically a
/// function returning a `&'static DynRule`, see
/// [`shared_rule!`](crate::shared_rule)) breaks the cycle. The thunk runs on
/// every execution, so it should be cheap: a static lookup, not a rebuild.
pub struct Forward<F>(pub F);

impl<R, F> Rule for Forward<F>
where
    R: Rule,
    F: Fn() -> R,
{
    type Output = R::Output;

    fn run(&self, input: &mut Input) -> Parsed<Self::Output> {
        (self.0)().exec(input)
    }
}
