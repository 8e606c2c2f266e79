mod answer_query;
mod resolve_question;

pub use answer_query::AnswerQueryUseCase;
pub use resolve_question::{resolve, ZoneResolver};
