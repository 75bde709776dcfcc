//! Effects produced by state transitions

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Say something to the user
    Speak {
        text: String,
        /// Repeated if the user stays silent; `None` for closing remarks
        reprompt: Option<String>,
    },

    /// Close the conversation after this turn
    EndSession,

    /// Fetch a question batch; its outcome comes back as an event
    FetchQuestions { count: usize },
}

impl Effect {
    /// Speak and reprompt with the same text
    pub fn ask(text: impl Into<String>) -> Self {
        let text = text.into();
        Effect::Speak {
            reprompt: Some(text.clone()),
            text,
        }
    }

    /// Speak without a reprompt
    pub fn say(text: impl Into<String>) -> Self {
        Effect::Speak {
            text: text.into(),
            reprompt: None,
        }
    }
}
