use crate::error::{ModelError, Result};
use crate::model::Account;
use crate::simulation::Model;

/// Advance `model` period by period until it reaches `target`
///
/// Each step bumps the current period first, then fires every rule whose
/// recurrence matches in list order, appending the transactions each returns.
/// Rules therefore see the new period and all earlier transactions.
///
/// Targeting a period before the current one fails before anything changes.
/// Targeting the current period is a no-op. If a rule fails, the error is
/// returned immediately and the model keeps whatever was recorded before it.
pub fn advance_to<A: Account>(model: &mut Model<A>, target: u32) -> Result<()> {
    if target < model.current_period {
        return Err(ModelError::SimulateBackwards {
            current: model.current_period,
            target,
        });
    }

    tracing::debug!(
        model = %model.name,
        from = model.current_period,
        to = target,
        "advancing model"
    );

    while model.current_period < target {
        model.current_period += 1;
        step(model)?;
    }

    tracing::debug!(
        model = %model.name,
        period = model.current_period,
        transactions = model.transactions.len(),
        "advance complete"
    );
    Ok(())
}

/// Fire every rule due at the model's current period
fn step<A: Account>(model: &mut Model<A>) -> Result<()> {
    let period = model.current_period;

    for index in 0..model.rules.len() {
        let rule = &model.rules[index];
        if !rule.recurrence.fires_at(period) {
            continue;
        }

        let produced = rule.evaluate(model).map_err(|source| ModelError::Rule {
            period,
            rule: rule
                .label()
                .map(str::to_owned)
                .unwrap_or_else(|| format!("#{index}")),
            source,
        })?;

        tracing::trace!(
            period,
            rule = rule.label().unwrap_or("unlabeled"),
            produced = produced.len(),
            "rule fired"
        );

        model.transactions.extend(produced);
    }

    Ok(())
}
