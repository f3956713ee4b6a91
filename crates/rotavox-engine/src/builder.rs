//! Wiring from declarative arrangement plans to engine operations.
//!
//! `rotavox-config` describes what to arrange; this module makes it
//! happen: rotation first, then placements, synchronization, visibility,
//! and finally exclusivity watchers registered with the event dispatcher.

use rotavox_config::{
    ArrangementConfig, ExclusivityPlan, PlacementPlan, QuestionPlan, RotationPlan, SyncPlan,
};
use rotavox_core::{OptionStore, QuestionDirectory, Result, RotavoxError};
use tracing::debug;

use crate::event::SelectionEventSupport;
use crate::exclusivity::{ExclusivityGroups, ExclusivityWatcher};
use crate::random::EngineRandom;
use crate::rotation::RotationConfig;
use crate::{piping, position, rotation, visibility};

/// Applies every question plan in `config`, in listed order.
///
/// The config is validated first; an invalid plan applies nothing.
pub fn apply_plan(
    store: &mut dyn OptionStore,
    directory: &dyn QuestionDirectory,
    events: &mut SelectionEventSupport,
    rng: &mut EngineRandom,
    config: &ArrangementConfig,
) -> Result<()> {
    config
        .validate()
        .map_err(|e| RotavoxError::Config(e.to_string()))?;
    for plan in &config.questions {
        apply_question_plan(store, directory, events, rng, plan)?;
    }
    Ok(())
}

/// Applies one question's plan.
pub fn apply_question_plan(
    store: &mut dyn OptionStore,
    directory: &dyn QuestionDirectory,
    events: &mut SelectionEventSupport,
    rng: &mut EngineRandom,
    plan: &QuestionPlan,
) -> Result<()> {
    let question = plan.id;
    debug!(%question, "applying arrangement plan");

    if let Some(rotation_plan) = &plan.rotation {
        rotation::rotate(
            store,
            rng,
            question,
            &rotation_plan.groups,
            &rotation_config(rotation_plan),
        )?;
    }

    for placement in &plan.placements {
        match placement {
            PlacementPlan::After { base, codes } => {
                position::place_after(store, question, *base, codes)?;
            }
            PlacementPlan::Before { base, codes } => {
                position::place_before(store, question, *base, codes)?;
            }
            PlacementPlan::Top { codes } => {
                position::place_at_top(store, question, codes)?;
            }
        }
    }

    if let Some(sync) = &plan.sync {
        match sync {
            SyncPlan::Descendants { exclude } => {
                piping::sync_descendants(store, directory, question, exclude)?;
            }
            SyncPlan::OneToOne { base } => {
                piping::sync_one_to_one(store, *base, question)?;
            }
        }
    }

    if !plan.hidden.is_empty() {
        visibility::set_hidden(store, question, &plan.hidden, true)?;
    }
    if !plan.disabled.is_empty() {
        visibility::set_disabled(store, question, &plan.disabled, true)?;
    }

    if !plan.exclusivity.is_empty() {
        let watcher =
            ExclusivityWatcher::attach(store, question, exclusivity_groups(&plan.exclusivity))?;
        events.attach(Box::new(watcher));
    }
    Ok(())
}

fn rotation_config(plan: &RotationPlan) -> RotationConfig {
    RotationConfig {
        group: plan.group,
        option: plan.option,
        top: plan.top.clone(),
        top_shuffle: plan.top_shuffle,
        bot: plan.bot.clone(),
        bot_shuffle: plan.bot_shuffle,
    }
}

fn exclusivity_groups(plans: &[ExclusivityPlan]) -> ExclusivityGroups {
    let mut groups = ExclusivityGroups::new();
    for plan in plans {
        if let Some(codes) = &plan.exclusive {
            groups = groups.exclusive(plan.name.as_str(), codes.iter().copied());
        } else if let Some([role0, role1]) = &plan.paired {
            groups = groups.paired(
                plan.name.as_str(),
                role0.iter().copied(),
                role1.iter().copied(),
            );
        }
    }
    groups
}
