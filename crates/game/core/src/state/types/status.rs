//! Status effect system for actors.
//!
//! Status effects are timed, stacking modifiers attached to a body part.
//! They are created when a weapon connects (or when an actor takes damage)
//! and age once per owning actor's turn end.
//!
//! # Turn-based Duration
//!
//! Each turn end decrements `duration`. When it runs out one stack is lost
//! and the duration is restored; when the last stack is lost the effect is
//! removed. Accumulated stress may instead convert into a long-lived illness.

use crate::config::StatusRules;

/// Name of the stacking effect that can turn into an illness.
pub const STRESS: &str = "Stress";

/// Debuff applied to every actor that takes damage.
pub const SIMPLIFIED: &str = "Simplified";

/// A single status effect instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub name: String,
    /// Body region tag (e.g. "brain", "heart", "wholebody").
    pub body_part: String,
    pub duration: i32,
    pub stack: u32,
    pub is_illness: bool,
    /// Same-named instances merge instead of coexisting.
    pub unique: bool,
}

impl StatusEffect {
    pub fn new(name: impl Into<String>, body_part: impl Into<String>, duration: i32) -> Self {
        Self {
            name: name.into(),
            body_part: body_part.into(),
            duration,
            stack: 1,
            is_illness: false,
            unique: true,
        }
    }

    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = stack.max(1);
        self
    }

    pub fn stacking(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn illness(mut self) -> Self {
        self.is_illness = true;
        self
    }

    /// The debuff every damaged actor receives, regardless of the weapon.
    pub fn simplified(rules: &StatusRules) -> Self {
        Self::new(SIMPLIFIED, "brain", rules.effect_duration)
    }

    /// Illness produced when stress on this body part converts.
    pub fn illness_for(body_part: &str, rules: &StatusRules) -> Self {
        Self::new(illness_name(body_part), body_part, rules.illness_duration).illness()
    }

    fn is_stress(&self) -> bool {
        !self.is_illness && self.name == STRESS
    }
}

/// Illness a stress effect on `body_part` converts into.
pub fn illness_name(body_part: &str) -> &'static str {
    match body_part {
        "brain" => "Burnout",
        "heart" => "Arrhythmia",
        "stomach" => "Gastritis",
        "eyes" => "Myopia",
        _ => "Chronic Fatigue",
    }
}

/// Outcome of aging a single effect at turn end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusChange {
    /// Stress was consumed and replaced by an illness.
    Converted { from: String, into: String },
    /// One stack ran out; `remaining` stacks are left.
    StackLost { name: String, remaining: u32 },
    /// The last stack ran out and the effect was removed.
    Expired { name: String },
}

/// Status effects carried by an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Adds a status effect.
    ///
    /// A `unique` effect whose name is already present merges into the
    /// existing instance by summing duration and stack.
    pub fn add(&mut self, effect: StatusEffect) {
        if effect.unique
            && let Some(existing) = self.effects.iter_mut().find(|e| e.name == effect.name)
        {
            existing.duration += effect.duration;
            existing.stack += effect.stack;
            return;
        }
        self.effects.push(effect);
    }

    /// Removes every effect with the given name.
    pub fn remove(&mut self, name: &str) {
        self.effects.retain(|e| e.name != name);
    }

    pub fn get(&self, name: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of instances carrying `name`.
    pub fn count(&self, name: &str) -> usize {
        self.effects.iter().filter(|e| e.name == name).count()
    }

    /// Effects attached to a body part.
    pub fn by_part<'a>(&'a self, part: &'a str) -> impl Iterator<Item = &'a StatusEffect> + 'a {
        self.effects.iter().filter(move |e| e.body_part == part)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Ages every effect by one turn.
    ///
    /// `roll` yields uniform samples in `[0, 1)` and is consulted once per
    /// stress effect eligible for conversion.
    pub fn tick(&mut self, rules: &StatusRules, mut roll: impl FnMut() -> f32) -> Vec<StatusChange> {
        let mut changes = Vec::new();
        let mut converted = Vec::new();
        let mut kept = Vec::with_capacity(self.effects.len());

        for mut effect in self.effects.drain(..) {
            if effect.is_stress() && effect.stack >= rules.conversion_threshold {
                let chance = rules.conversion_chance(effect.stack);
                if roll() < chance {
                    let illness = StatusEffect::illness_for(&effect.body_part, rules);
                    changes.push(StatusChange::Converted {
                        from: effect.name,
                        into: illness.name.clone(),
                    });
                    converted.push(illness);
                    continue;
                }
            }

            effect.duration -= 1;
            if effect.duration > 0 {
                kept.push(effect);
                continue;
            }

            effect.stack = effect.stack.saturating_sub(1);
            if effect.stack == 0 {
                changes.push(StatusChange::Expired { name: effect.name });
                continue;
            }

            effect.duration = if effect.is_illness {
                rules.illness_duration
            } else {
                rules.effect_duration
            };
            changes.push(StatusChange::StackLost {
                name: effect.name.clone(),
                remaining: effect.stack,
            });
            kept.push(effect);
        }

        self.effects = kept;
        for illness in converted {
            self.add(illness);
        }
        changes
    }
}

impl<'a> IntoIterator for &'a StatusEffects {
    type Item = &'a StatusEffect;
    type IntoIter = std::slice::Iter<'a, StatusEffect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> StatusRules {
        StatusRules::default()
    }

    #[test]
    fn unique_effects_merge_duration_and_stack() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new("Burn", "wholebody", 3));
        status.add(StatusEffect::new("Burn", "wholebody", 4).with_stack(2));

        assert_eq!(status.count("Burn"), 1);
        let burn = status.get("Burn").unwrap();
        assert_eq!(burn.duration, 7);
        assert_eq!(burn.stack, 3);
    }

    #[test]
    fn non_unique_effects_coexist() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new("Bleed", "left_arm", 2).stacking(false));
        status.add(StatusEffect::new("Bleed", "left_arm", 2).stacking(false));
        assert_eq!(status.count("Bleed"), 2);
    }

    #[test]
    fn expiring_duration_costs_one_stack_and_resets() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new("Dizzy", "brain", 1).with_stack(2));

        let changes = status.tick(&rules(), || 1.0);
        assert_eq!(
            changes,
            vec![StatusChange::StackLost {
                name: "Dizzy".into(),
                remaining: 1
            }]
        );
        let dizzy = status.get("Dizzy").unwrap();
        assert_eq!(dizzy.duration, rules().effect_duration);
        assert_eq!(dizzy.stack, 1);
    }

    #[test]
    fn last_stack_removes_effect() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new("Dizzy", "brain", 1));
        let changes = status.tick(&rules(), || 1.0);
        assert_eq!(
            changes,
            vec![StatusChange::Expired {
                name: "Dizzy".into()
            }]
        );
        assert!(status.is_empty());
    }

    #[test]
    fn illness_resets_to_long_duration() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new("Burnout", "brain", 1).with_stack(2).illness());
        status.tick(&rules(), || 1.0);
        assert_eq!(status.get("Burnout").unwrap().duration, 50);
    }

    #[test]
    fn stress_converts_into_body_part_illness() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new(STRESS, "heart", 5).with_stack(3));

        let changes = status.tick(&rules(), || 0.0);
        assert_eq!(
            changes,
            vec![StatusChange::Converted {
                from: STRESS.into(),
                into: "Arrhythmia".into()
            }]
        );
        assert!(!status.has(STRESS));
        let illness = status.get("Arrhythmia").unwrap();
        assert!(illness.is_illness);
        assert_eq!(illness.duration, 50);
    }

    #[test]
    fn failed_conversion_only_ages_stress() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new(STRESS, "brain", 5).with_stack(3));

        // 3 stacks convert with probability 0.2; a 0.5 sample misses.
        let changes = status.tick(&rules(), || 0.5);
        assert!(changes.is_empty());
        let stress = status.get(STRESS).unwrap();
        assert_eq!(stress.duration, 4);
        assert_eq!(stress.stack, 3);
    }

    #[test]
    fn stress_below_threshold_never_rolls() {
        let mut status = StatusEffects::empty();
        status.add(StatusEffect::new(STRESS, "brain", 5).with_stack(2));
        status.tick(&rules(), || panic!("no roll expected"));
        assert!(status.has(STRESS));
    }
}
