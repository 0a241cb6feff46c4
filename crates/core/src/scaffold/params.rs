//! Interactive collection of parameter values.

use crate::ports::prompt::{PickItem, PromptPort};
use crate::scaffold::error::ScaffoldResult;
use crate::template::ParamValues;
use sk_protocol::template_models::ParameterDefinition;

/// Asks for a value for every parameter, in declaration order.
///
/// Parameters with choices are answered with [`PromptPort::pick_one`];
/// the rest with [`PromptPort::input_text`] pre-filled with the default.
/// Prompts are titled with the description, or the key when there is none.
///
/// Returns `Ok(None)` as soon as any prompt goes unanswered. An empty text
/// answer is unanswered. No further
/// prompts are issued and the values collected so far are discarded.
///
/// # Errors
///
/// Returns `ScaffoldError::Prompt` if a prompt fails for another reason.
pub async fn collect(
    parameters: &[ParameterDefinition],
    ask: &dyn PromptPort,
) -> ScaffoldResult<Option<ParamValues>> {
    let mut values = ParamValues::new();

    for parameter in parameters {
        let Some(value) = ask_parameter(parameter, ask).await? else {
            tracing::debug!(key = %parameter.key, "parameter collection cancelled");
            return Ok(None);
        };
        values.insert(parameter.key.clone(), value);
    }

    Ok(Some(values))
}

async fn ask_parameter(
    parameter: &ParameterDefinition,
    ask: &dyn PromptPort,
) -> ScaffoldResult<Option<String>> {
    let title = parameter
        .description
        .as_deref()
        .unwrap_or(parameter.key.as_str());

    if let Some(choices) = parameter.enumerated_choices() {
        let items: Vec<PickItem> = choices.iter().map(PickItem::new).collect();
        let picked = ask.pick_one(Some(title), &items).await?;
        // An index the port made up is treated like no answer.
        return Ok(picked.and_then(|index| choices.get(index).cloned()));
    }

    let answer = ask
        .input_text(Some(title), Some(parameter.default.as_str()))
        .await?;
    // An empty answer counts as no answer.
    Ok(answer.filter(|value| !value.is_empty()))
}
