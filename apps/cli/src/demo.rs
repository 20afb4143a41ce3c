//! Seeds a demonstration baby with a few days of events.

use chrono::{Duration, Utc};

use nestling_core::babies::{BabyServiceTrait, Gender, NewBaby};
use nestling_core::feeding::FinishSide;
use nestling_core::{activity, feeding, health};

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<String> {
    let now = Utc::now();
    let baby = ctx.babies.create_baby(NewBaby {
        id: None,
        name: "Demo Baby".to_string(),
        birthday: now - Duration::days(45),
        gender: Gender::Female,
        due_date: None,
        picture: None,
    })?;

    for day in 0..5 {
        let day_start = now - Duration::days(day) - Duration::hours(16);

        for (hour, minutes) in [(0i64, 15), (4, 10), (9, 12)] {
            ctx.feeding.add_nursing(feeding::NewNursing {
                id: None,
                baby_id: baby.id.clone(),
                event_time: day_start + Duration::hours(hour),
                note: None,
                has_picture: false,
                type_id: Some("1".to_string()),
                finish_side: if hour % 2 == 0 { FinishSide::Left } else { FinishSide::Right },
                left_minutes: minutes / 2,
                right_minutes: minutes - minutes / 2,
                both_minutes: 0,
            })?;
        }

        ctx.feeding.add_formula(feeding::NewFormula {
            id: None,
            baby_id: baby.id.clone(),
            event_time: day_start + Duration::hours(6),
            note: None,
            has_picture: false,
            type_id: Some("4".to_string()),
            amount_ml: 80.0 + day as f64 * 5.0,
        })?;

        ctx.health.add_sleep(health::NewSleep {
            id: None,
            baby_id: baby.id.clone(),
            event_time: day_start + Duration::hours(2),
            note: None,
            has_picture: false,
            type_id: Some("2".to_string()),
            minutes: 90,
        })?;

        for hour in [1i64, 5, 10] {
            ctx.health.add_diaper(health::NewDiaper {
                id: None,
                baby_id: baby.id.clone(),
                event_time: day_start + Duration::hours(hour),
                note: None,
                has_picture: false,
                type_id: Some(if hour == 5 { "2" } else { "1" }.to_string()),
            })?;
        }
    }

    // A short growth series plus one fever reading.
    for (days_ago, grams) in [(30i64, 4100.0), (15, 4400.0), (1, 4750.0)] {
        ctx.health.add_weight(health::NewWeight {
            id: None,
            baby_id: baby.id.clone(),
            event_time: now - Duration::days(days_ago),
            note: None,
            has_picture: false,
            grams,
        })?;
    }
    ctx.health.add_height(health::NewHeight {
        id: None,
        baby_id: baby.id.clone(),
        event_time: now - Duration::days(1),
        note: None,
        has_picture: false,
        centimeters: 55.5,
    })?;
    ctx.health.add_temperature(health::NewTemperature {
        id: None,
        baby_id: baby.id.clone(),
        event_time: now - Duration::days(2),
        note: Some("Evening check".to_string()),
        has_picture: false,
        celsius: 37.6,
        location: Some("armpit".to_string()),
    })?;

    ctx.activity.add_playtime(activity::NewPlaytime {
        id: None,
        baby_id: baby.id.clone(),
        event_time: now - Duration::hours(20),
        note: None,
        has_picture: false,
        minutes: 25,
        play_kind: Some("tummy time".to_string()),
    })?;
    ctx.activity.add_bath(activity::NewBath {
        id: None,
        baby_id: baby.id.clone(),
        event_time: now - Duration::days(1) - Duration::hours(2),
        note: None,
        has_picture: false,
        minutes: 10,
        water_celsius: Some(37.0),
    })?;

    tracing::info!("Seeded demo data for baby {}", baby.id);
    Ok(baby.id)
}
