use crate::models::domain::Question;

/// Canonical question bank. Clients render it from `GET /api/questions`; the
/// prompt only ever uses this copy.
pub const QUESTIONS: &[Question] = &[
    Question { id: 1, text: "I prefer to spend my free time with others rather than alone." },
    Question { id: 2, text: "I trust my gut feelings when making decisions." },
    Question { id: 3, text: "I like to have a detailed plan before starting a project." },
    Question { id: 4, text: "I find it easy to empathize with people who have different viewpoints." },
    Question { id: 5, text: "I enjoy exploring new and unconventional ideas." },
    Question { id: 6, text: "I prefer sticking to tried-and-true methods." },
    Question { id: 7, text: "I often think about the long-term consequences of my actions." },
    Question { id: 8, text: "I am comfortable with ambiguity and uncertainty." },
    Question { id: 9, text: "I find it energizing to be the center of attention." },
    Question { id: 10, text: "I prefer to analyze all the facts before making a decision." },
    Question { id: 11, text: "I am good at mediating conflicts between people." },
    Question { id: 12, text: "I enjoy spontaneous activities and surprises." },
];

pub fn find_question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}
