use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, PartialEq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

pub static QUESTIONS: &[Question] = &[
    Question {
        prompt: "Qual tecnologia mede a umidade do solo em tempo real?",
        options: &["Drones de pulverização", "Sensores IoT de solo", "Tratores autônomos", "Estufas de vidro"],
        correct: 1,
        explanation: "Sensores IoT enterrados no solo enviam leituras de umidade continuamente para a plataforma de monitoramento.",
    },
    Question {
        prompt: "A irrigação por gotejamento economiza água porque...",
        options: &[
            "molha toda a área de uma vez",
            "funciona apenas à noite",
            "entrega água diretamente na raiz da planta",
            "usa somente água da chuva",
        ],
        correct: 2,
        explanation: "Levar a água direto à raiz reduz a evaporação e o escoamento superficial.",
    },
    Question {
        prompt: "Para que servem as imagens de satélite na agricultura de precisão?",
        options: &[
            "Identificar variações de vigor da lavoura",
            "Substituir a análise de solo",
            "Aumentar a chuva na região",
            "Controlar o preço das sementes",
        ],
        correct: 0,
        explanation: "Índices como o NDVI mostram áreas com menor vigor antes que o problema fique visível a olho nu.",
    },
    Question {
        prompt: "O que é um quebra-vento?",
        options: &[
            "Um tipo de fertilizante",
            "Uma barreira de árvores ou estruturas que reduz a velocidade do vento",
            "Um sensor de temperatura",
            "Uma técnica de colheita",
        ],
        correct: 1,
        explanation: "Quebra-ventos protegem culturas sensíveis e reduzem a perda de umidade do solo.",
    },
    Question {
        prompt: "Qual prática ajuda a reduzir as emissões de CO₂ no campo?",
        options: &[
            "Queimada da palhada",
            "Aração profunda todos os anos",
            "Plantio direto com cobertura vegetal",
            "Aumento do uso de diesel",
        ],
        correct: 2,
        explanation: "O plantio direto mantém o carbono no solo e reduz o número de operações com máquinas.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Beginner,
    Intermediate,
    Expert,
}

impl Tier {
    pub fn from_score(score: usize, total: usize) -> Tier {
        if total == 0 {
            return Tier::Beginner;
        }
        let percent = score * 100 / total;
        if percent >= 80 {
            Tier::Expert
        } else if percent >= 50 {
            Tier::Intermediate
        } else {
            Tier::Beginner
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Tier::Expert => "Especialista em AgroTech!",
            Tier::Intermediate => "Bom conhecimento!",
            Tier::Beginner => "Começando a jornada",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Expert => "Você domina as tecnologias do campo. Que tal levar isso para a sua propriedade?",
            Tier::Intermediate => "Você já conhece o básico. Nossos especialistas podem ajudar com o próximo passo.",
            Tier::Beginner => "Toda transformação começa com curiosidade. Fale com a gente e descubra por onde começar.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    questions: &'static [Question],
    current: usize,
    answers: Vec<Option<usize>>,
    finished: bool,
}

pub enum QuizAction {
    Choose(usize),
    Next,
    Restart,
}

impl Default for Quiz {
    fn default() -> Self {
        Quiz::new(QUESTIONS)
    }
}

impl Quiz {
    pub fn new(questions: &'static [Question]) -> Self {
        Quiz {
            questions,
            current: 0,
            answers: vec![None; questions.len()],
            finished: questions.is_empty(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct))
            .count()
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score(), self.total())
    }

    fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::Choose(option) => {
                let Some(question) = self.current_question() else {
                    return;
                };
                // first answer sticks
                if option < question.options.len() && self.answers[self.current].is_none() {
                    self.answers[self.current] = Some(option);
                }
            }
            QuizAction::Next => {
                if self.finished || self.current_answer().is_none() {
                    return;
                }
                if self.current + 1 < self.questions.len() {
                    self.current += 1;
                } else {
                    self.finished = true;
                }
            }
            QuizAction::Restart => *self = Quiz::new(self.questions),
        }
    }
}

impl Reducible for Quiz {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(answers: &[usize]) -> Quiz {
        let mut quiz = Quiz::default();
        for &answer in answers {
            quiz.apply(QuizAction::Choose(answer));
            quiz.apply(QuizAction::Next);
        }
        quiz
    }

    fn correct_answers() -> Vec<usize> {
        QUESTIONS.iter().map(|q| q.correct).collect()
    }

    #[test]
    fn bank_is_well_formed() {
        assert!(!QUESTIONS.is_empty());
        for question in QUESTIONS {
            assert!(question.correct < question.options.len(), "{}", question.prompt);
            assert!(question.options.len() >= 2);
        }
    }

    #[test]
    fn perfect_run_is_expert() {
        let quiz = play(&correct_answers());
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), QUESTIONS.len());
        assert_eq!(quiz.tier(), Tier::Expert);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn all_wrong_is_beginner() {
        let wrong: Vec<usize> = QUESTIONS.iter().map(|q| (q.correct + 1) % q.options.len()).collect();
        let quiz = play(&wrong);
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.tier(), Tier::Beginner);
    }

    #[test]
    fn tier_cutoffs() {
        assert_eq!(Tier::from_score(4, 5), Tier::Expert);
        assert_eq!(Tier::from_score(3, 5), Tier::Intermediate);
        assert_eq!(Tier::from_score(2, 4), Tier::Intermediate);
        assert_eq!(Tier::from_score(2, 5), Tier::Beginner);
        assert_eq!(Tier::from_score(0, 0), Tier::Beginner);
    }

    #[test]
    fn cannot_advance_without_answer() {
        let mut quiz = Quiz::default();
        quiz.apply(QuizAction::Next);
        assert_eq!(quiz.current_index(), 0);
        assert!(!quiz.is_finished());
    }

    #[test]
    fn first_choice_is_locked_in() {
        let mut quiz = Quiz::default();
        let correct = QUESTIONS[0].correct;
        quiz.apply(QuizAction::Choose(correct));
        quiz.apply(QuizAction::Choose((correct + 1) % QUESTIONS[0].options.len()));
        assert_eq!(quiz.current_answer(), Some(correct));
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut quiz = Quiz::default();
        quiz.apply(QuizAction::Choose(99));
        assert_eq!(quiz.current_answer(), None);
    }

    #[test]
    fn restart_clears_progress() {
        let quiz = Rc::new(play(&correct_answers()));
        let restarted = quiz.reduce(QuizAction::Restart);
        assert_eq!(*restarted, Quiz::default());
        assert_eq!(restarted.score(), 0);
    }
}
