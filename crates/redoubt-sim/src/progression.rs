//! Currency and XP progression for the player.
//!
//! All outcomes are reported as return values; reward sources (kills,
//! sales) feed these functions synchronously from the engine.

use redoubt_core::components::{Health, Progression, Weapon};
use redoubt_core::constants::{LEVEL_DAMAGE_BONUS, LEVEL_HEALTH_BONUS, XP_LEVEL_MULTIPLIER};

/// Add XP and resolve any level-ups. Returns the number of levels gained.
///
/// Each level consumes the current threshold, grows it by the level
/// multiplier (floor-rounded), raises max health, heals to full, and adds
/// projectile damage. The loop terminates because the threshold grows by
/// a factor greater than one each iteration.
pub fn gain_xp(
    progression: &mut Progression,
    health: &mut Health,
    weapon: &mut Weapon,
    amount: u32,
) -> u32 {
    progression.xp += amount;

    let mut levels_gained = 0;
    while progression.xp >= progression.xp_to_next_level {
        progression.xp -= progression.xp_to_next_level;
        progression.level += 1;
        progression.xp_to_next_level =
            (progression.xp_to_next_level as f64 * XP_LEVEL_MULTIPLIER).floor() as u32;

        health.max += LEVEL_HEALTH_BONUS;
        health.current = health.max;
        weapon.damage += LEVEL_DAMAGE_BONUS;

        levels_gained += 1;
    }

    levels_gained
}

/// Add money. Uncapped.
pub fn gain_money(progression: &mut Progression, amount: u32) {
    progression.money = progression.money.saturating_add(amount);
}

/// Deduct `amount` iff the balance covers it. Returns whether the
/// purchase succeeded; on failure the balance is untouched.
pub fn spend_money(progression: &mut Progression, amount: u32) -> bool {
    if progression.money >= amount {
        progression.money -= amount;
        true
    } else {
        false
    }
}
