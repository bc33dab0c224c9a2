/// Number-to-words conversion engine.
///
/// Pure and synchronous: a validated `Amount` in, an uppercase English
/// phrase out. The engine holds no state beyond `'static` lookup tables,
/// so concurrent calls need no locking. Free-text parsing lives in
/// `crate::text_input`; nothing here ever sees raw user input.
pub mod amount;
pub mod lexicon;
pub mod periods;
pub mod words;

pub use amount::{Amount, Sign};
pub use words::convert_amount_to_words;
