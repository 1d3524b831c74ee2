/// Build a `&'static` [`DynRule`](crate::DynRule) backed by a lazily
/// initialised static.
///
/// Recursive grammars tie the knot by putting each rule behind a function
/// returning one of these and referencing the others through
/// [`Forward`](crate::Forward):
///
/// ```
/// use parlex::{shared_rule, DynRule, Either, Forward, Outcome, Rule, Sequence, TokenList};
/// use once_cell::sync::Lazy;
/// use std::sync::Arc;
/// use parlex::TokenRule;
///
/// struct Tokens {
///     list: TokenList,
///     number: Arc<TokenRule>,
///     lparen: Arc<TokenRule>,
///     rparen: Arc<TokenRule>,
/// }
///
/// static TOKENS: Lazy<Tokens> = Lazy::new(|| {
///     let mut list = TokenList::new();
///     let number = list.add("[0-9]+");
///     let lparen = list.literal("(");
///     let rparen = list.literal(")");
///     Tokens { list, number, lparen, rparen }
/// });
///
/// // value = number | "(" value ")"
/// fn value() -> &'static DynRule<i64> {
///     shared_rule!(i64, {
///         let number = TOKENS.number.clone().transform(|lexeme| match lexeme.text().parse() {
///             Ok(n) => Outcome::Match(n),
///             Err(_) => Outcome::NoMatch,
///         });
///         let grouped = Sequence((TOKENS.lparen.clone(), Forward(value), TOKENS.rparen.clone()))
///             .map(|(_, inner, _)| inner);
///         Either((number, grouped))
///     })
/// }
///
/// let language = parlex::Language::new(Forward(value), TOKENS.list.clone());
/// assert_eq!(language.parse("((7))").unwrap(), 7);
/// ```
#[macro_export]
macro_rules! shared_rule {
    ($ty:ty, $builder:expr) => {{
        static RULE: once_cell::sync::Lazy<$crate::DynRule<$ty>> =
            once_cell::sync::Lazy::new(|| $crate::DynRule::new($builder));
        &*RULE
    }};
}

// Early return on no-match; the Outcome analogue of `?`.
macro_rules! try_match {
    ($parsed:expr) => {
        match $parsed? {
            $crate::Outcome::Match(value) => value,
            $crate::Outcome::NoMatch => return Ok($crate::Outcome::NoMatch),
        }
    };
}
