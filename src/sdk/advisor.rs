// Investment-advisor flow reusing the chat-completion client. The in-memory
// model carries explanations and the user's selection; the outbound wire
// form is a strict subset of it, produced by an explicit projection.
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::sdk::routing::ai::ChatClient;
use crate::sdk::routing::error::RideError;

const ADVISOR_SYSTEM_PROMPT: &str = "You are a stock investment advisor. Provide a list of 3 \
stock choices based on the answers to questions already provided. Double check that the stocks \
fit the answers provided. Ensure that the JSON is valid and do not put any extra characters \
before or after the JSON in the content field. Do not send an incomplete response - ensure the \
full JSON is sent in the content field. The response should be structured as follows: \
{\"text\": \"These stocks fit your investment criterion:\", \"options\": [{\"id\": \"A\", \
\"answer\": \"answer text here\", \"explanation\": \"Explanation of the option here\"}, \
{\"id\": \"B\", \"answer\": \"answer text here\", \"explanation\": \"Explanation of the option \
here\"}, {\"id\": \"C\", \"answer\": \"answer text here\", \"explanation\": \"Explanation of \
the option here\"}]}";

/// One selectable answer, with the reasoning shown to the user once chosen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub answer: String,
    pub explanation: String,
}

/// A question with its options and, once the user picked one, the selection.
/// The selection is local state and never appears on the wire in either
/// direction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InvestmentQuestion {
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(skip)]
    pub selected_option_id: Option<String>,
}

/// Outbound wire form of a question: only the chosen option, stripped down
/// to id and answer.
#[derive(Debug, Serialize)]
pub struct QuestionWire<'a> {
    pub text: &'a str,
    pub options: Vec<OptionWire<'a>>,
}

#[derive(Debug, Serialize)]
pub struct OptionWire<'a> {
    pub id: &'a str,
    pub answer: &'a str,
}

impl InvestmentQuestion {
    /// Narrows the full in-memory question to what is sent outward. Without
    /// a selection no options are serialized at all.
    pub fn to_wire(&self) -> QuestionWire<'_> {
        QuestionWire {
            text: &self.text,
            options: self
                .options
                .iter()
                .filter(|option| Some(option.id.as_str()) == self.selected_option_id.as_deref())
                .map(|option| OptionWire {
                    id: &option.id,
                    answer: &option.answer,
                })
                .collect(),
        }
    }
}

/// Decodes the recommendation the model embedded in its answer. The inbound
/// shape carries explanations; nothing is selected yet.
pub fn parse_recommendations(content: &str) -> Result<InvestmentQuestion, RideError> {
    serde_json::from_str(content).map_err(RideError::DecodeFailure)
}

/// Asks the model for stock picks that fit the already-answered questions.
pub async fn stock_recommendations(
    chat: &ChatClient,
    answered: &[InvestmentQuestion],
) -> Result<InvestmentQuestion, RideError> {
    let prior: Vec<QuestionWire<'_>> = answered.iter().map(InvestmentQuestion::to_wire).collect();
    let prior_json = serde_json::to_string(&prior).unwrap_or_default();

    let body = json!({
        "model": "gpt-3.5-turbo",
        "messages": [
            {
                "role": "system",
                "content": ADVISOR_SYSTEM_PROMPT
            },
            {
                "role": "user",
                "content": format!(
                    "Provide 3 stocks that exist in the S&P 500 that fit the criteria of answers \
                     given to prior questions. Use latest data for recommendations. Prior \
                     Questions and answers chosen by user: {}",
                    prior_json
                )
            }
        ],
        "temperature": 0,
        "max_tokens": 200,
        "stream": false
    });

    let content = chat.complete(body).await?;
    parse_recommendations(&content)
}
