pub mod frame;
pub mod lexicon;
pub mod phrase;
pub mod speech;
