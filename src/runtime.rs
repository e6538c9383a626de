//! Parser runtime primitives (spec.md §4.A). Every block/inline alternative
//! in this crate (`blocks::*`, `inlines::*`) is a hand-rolled function over
//! plain `&str` slices returning `Option<(T, &str)>` — the leaf grammar here
//! is line-and-column-oriented (tab-stop arithmetic, per-line marker
//! stripping, indentation counting) rather than the token-stream shape a
//! combinator library's `alt`/`tag`/`take_while` suit best, so `choice` is
//! just a fixed sequence of `if let Some(...) = alt(...) { return ... }`
//! attempts (see `blocks::parse_blocks`/`inlines::parse_inlines`), `option`
//! is `Option`'s own combinators, and `many`/`many1`/`manyTill` are `loop`s
//! over `&str` slicing.
//!
//! What none of that gives for free is `try` over the *mutable* `ParserState`
//! that spec.md §3/§9 thread through every production. `try_state` is that
//! missing piece: it snapshots the scalar state fields, runs a speculative
//! step, and rewinds them on failure — exactly the "value-semantic state,
//! cheap clone on `try`" shape spec.md §9 recommends. Cursor backtracking
//! itself is automatic: callers only advance their `&str` slice once a step
//! returns `Some`.

use crate::state::ParserState;

/// Run `f` against `state`; on `None` (failure), state is rewound to
/// exactly what it was before `f` ran. Cursor rewinding is automatic
/// because callers only advance their `&str` slice after `f` returns `Some`.
pub fn try_state<T>(
    state: &mut ParserState,
    f: impl FnOnce(&mut ParserState) -> Option<T>,
) -> Option<T> {
    let snapshot = state.snapshot();
    match f(state) {
        Some(value) => Some(value),
        None => {
            state.restore(snapshot);
            None
        }
    }
}

/// `lookAhead`: run `f`, report whether it would succeed, always rewind
/// state (and, since callers pass it the same `&str` slice they started
/// with, the cursor too).
pub fn look_ahead_state<T>(
    state: &mut ParserState,
    f: impl FnOnce(&mut ParserState) -> Option<T>,
) -> Option<T> {
    let snapshot = state.snapshot();
    let result = f(state);
    state.restore(snapshot);
    result
}
