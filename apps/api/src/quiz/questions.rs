//! Question bank. Immutable seed data shared process-wide.

use std::collections::HashMap;

use crate::models::quiz::{Question, QuestionCategory};

/// Read-only set of quiz questions, ordered by category then id.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<i32, usize>,
}

impl QuestionBank {
    pub fn new(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| (q.category, q.id));
        let index = questions
            .iter()
            .enumerate()
            .map(|(pos, q)| (q.id, pos))
            .collect();
        Self { questions, index }
    }

    /// The bank seeded at startup.
    pub fn seeded() -> Self {
        let mut next_id = 0;
        let questions = SEED_QUESTIONS
            .iter()
            .map(|(category, text)| {
                next_id += 1;
                Question {
                    id: next_id,
                    text: text.to_string(),
                    category: *category,
                }
            })
            .collect();
        Self::new(questions)
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: i32) -> Option<&Question> {
        self.index.get(&id).map(|&pos| &self.questions[pos])
    }

    pub fn contains(&self, id: i32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn by_category(&self, category: QuestionCategory) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

const SEED_QUESTIONS: &[(QuestionCategory, &str)] = &[
    // Interest
    (QuestionCategory::Interest, "What do you think about gardening? Gardening involves nurturing plants, understanding soil conditions, and creating beautiful outdoor spaces. It requires patience, attention to detail, and a connection with nature."),
    (QuestionCategory::Interest, "What do you think about driving a car? Driving requires spatial awareness, quick decision-making, and the ability to navigate through traffic while following safety rules and regulations."),
    (QuestionCategory::Interest, "What do you think about advising others? Advising others involves listening to problems, analyzing situations, and providing guidance to help people make better decisions in their personal or professional lives."),
    (QuestionCategory::Interest, "What do you think about cooking? Cooking involves creativity, following recipes, understanding flavors, and the ability to prepare meals that bring joy and nourishment to people."),
    (QuestionCategory::Interest, "What do you think about teaching? Teaching involves explaining complex concepts, patience with different learning styles, and the ability to inspire and guide students in their educational journey."),
    (QuestionCategory::Interest, "What do you think about working with computers? Computer work involves problem-solving, logical thinking, and the ability to work with various software and programming languages to create digital solutions."),
    (QuestionCategory::Interest, "What do you think about helping people in need? Helping others involves empathy, compassion, and the desire to make a positive impact in people's lives through various forms of assistance and support."),
    (QuestionCategory::Interest, "What do you think about analyzing data? Data analysis involves working with numbers, identifying patterns, and using statistical methods to draw meaningful insights from information."),
    (QuestionCategory::Interest, "What do you think about designing things? Design involves creativity, understanding aesthetics, and the ability to create functional and visually appealing solutions for various problems."),
    (QuestionCategory::Interest, "What do you think about managing projects? Project management involves planning, organizing resources, coordinating teams, and ensuring successful completion of goals within time and budget constraints."),
    // Degree
    (QuestionCategory::Degree, "What do you think about B.Com (Bachelor of Commerce)? B.Com is a 3-year undergraduate degree focusing on business, accounting, economics, and finance. It prepares students for careers in banking, finance, accounting, and business management."),
    (QuestionCategory::Degree, "What do you think about B.Tech (Bachelor of Technology)? B.Tech is a 4-year engineering degree that focuses on technical skills, problem-solving, and innovation. It covers various specializations like computer science, mechanical, civil, and electrical engineering."),
    (QuestionCategory::Degree, "What do you think about LLB (Bachelor of Laws)? LLB is a 3-year law degree that teaches legal principles, case studies, and legal reasoning. It prepares students for careers in law, judiciary, legal consulting, and corporate legal departments."),
    (QuestionCategory::Degree, "What do you think about MBBS (Bachelor of Medicine and Bachelor of Surgery)? MBBS is a 5.5-year medical degree that trains students to become doctors. It involves extensive study of human anatomy, diseases, treatments, and clinical practice."),
    (QuestionCategory::Degree, "What do you think about B.Sc (Bachelor of Science)? B.Sc is a 3-year science degree covering subjects like physics, chemistry, biology, mathematics, and computer science. It provides a strong foundation for research and technical careers."),
    (QuestionCategory::Degree, "What do you think about BBA (Bachelor of Business Administration)? BBA is a 3-year business degree focusing on management principles, marketing, human resources, and entrepreneurship. It prepares students for leadership roles in business."),
    (QuestionCategory::Degree, "What do you think about B.Arch (Bachelor of Architecture)? B.Arch is a 5-year architecture degree that combines creativity with technical skills. It involves designing buildings, understanding construction, and creating functional spaces."),
    (QuestionCategory::Degree, "What do you think about B.Ed (Bachelor of Education)? B.Ed is a 2-year teacher training degree that prepares students to become educators. It covers teaching methods, child psychology, and educational theories."),
    // Career
    (QuestionCategory::Career, "What do you think about working in the IT sector? The IT sector involves developing software, managing networks, cybersecurity, data analysis, and creating digital solutions. It offers high growth potential and competitive salaries."),
    (QuestionCategory::Career, "What do you think about becoming a lawyer? Being a lawyer involves representing clients in court, providing legal advice, drafting documents, and ensuring justice. It requires strong analytical skills and knowledge of law."),
    (QuestionCategory::Career, "What do you think about becoming a doctor? Being a doctor involves diagnosing and treating patients, performing surgeries, and saving lives. It requires extensive medical knowledge, compassion, and the ability to work under pressure."),
    (QuestionCategory::Career, "What do you think about becoming a teacher? Teaching involves educating students, developing lesson plans, and inspiring young minds. It requires patience, communication skills, and a passion for knowledge sharing."),
    (QuestionCategory::Career, "What do you think about becoming an engineer? Engineering involves designing, building, and maintaining systems and structures. It requires problem-solving skills, technical knowledge, and the ability to work with complex systems."),
    (QuestionCategory::Career, "What do you think about becoming a business manager? Business management involves leading teams, making strategic decisions, and ensuring organizational success. It requires leadership skills, analytical thinking, and business acumen."),
    (QuestionCategory::Career, "What do you think about becoming a designer? Design involves creating visual solutions, understanding user needs, and combining aesthetics with functionality. It requires creativity, technical skills, and attention to detail."),
    (QuestionCategory::Career, "What do you think about becoming a researcher? Research involves investigating problems, conducting experiments, and contributing to knowledge. It requires curiosity, analytical skills, and the ability to work independently."),
    (QuestionCategory::Career, "What do you think about becoming a social worker? Social work involves helping vulnerable populations, advocating for social justice, and providing support services. It requires empathy, communication skills, and a desire to help others."),
    (QuestionCategory::Career, "What do you think about becoming an entrepreneur? Entrepreneurship involves starting and running your own business, taking risks, and creating innovative solutions. It requires creativity, leadership, and the ability to handle uncertainty."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_bank_has_all_categories() {
        let bank = QuestionBank::seeded();
        assert_eq!(bank.len(), 28);
        assert_eq!(bank.by_category(QuestionCategory::Interest).len(), 10);
        assert_eq!(bank.by_category(QuestionCategory::Degree).len(), 8);
        assert_eq!(bank.by_category(QuestionCategory::Career).len(), 10);
    }

    #[test]
    fn test_questions_ordered_by_category_then_id() {
        let bank = QuestionBank::new(vec![
            Question {
                id: 2,
                text: "b".to_string(),
                category: QuestionCategory::Career,
            },
            Question {
                id: 3,
                text: "c".to_string(),
                category: QuestionCategory::Interest,
            },
            Question {
                id: 1,
                text: "a".to_string(),
                category: QuestionCategory::Interest,
            },
        ]);
        let ids: Vec<i32> = bank.all().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(bank.get(2).map(|q| q.text.as_str()), Some("b"));
        assert!(!bank.contains(99));
    }
}
