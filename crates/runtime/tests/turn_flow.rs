mod common;

use common::{RecordingAnimator, encounter, runtime_with};
use game_core::{Action, ActionResult, AnimationCue, AppliedEffect, EffectTarget, TargetSelection};
use runtime::{CombatEvent, Event, NoopAnimator, Topic, TurnEvent, TurnOutcome};

#[tokio::test]
async fn fireball_kills_then_survivor_retaliates() {
    let animator = RecordingAnimator::default();
    let runtime = runtime_with(encounter(&["Goblin", "Goblin"]), animator.clone()).await;

    let report = runtime.play_turn(TargetSelection::single(0)).await.unwrap();

    assert_eq!(report.outcome, TurnOutcome::Continue);
    assert_eq!(report.deaths, vec![0]);
    assert_eq!(report.snapshot.enemies.len(), 1);
    assert_eq!(report.snapshot.enemies[0].health, 10);
    assert_eq!(report.snapshot.player_health, 97);
    assert_eq!(report.snapshot.current_slot, 1);
    assert!(report.snapshot.player_turn);

    assert_eq!(
        animator.cues(),
        vec![
            AnimationCue::SpellCast {
                spell: "Fireball".to_owned(),
                targets: vec![0],
            },
            AnimationCue::EnemyDies { enemy: 0 },
            AnimationCue::EnemyActs {
                enemy: 0,
                name: "Goblin".to_owned(),
            },
        ]
    );
}

#[tokio::test]
async fn killed_enemy_never_acts() {
    let runtime = runtime_with(encounter(&["Goblin", "Goblin"]), NoopAnimator).await;

    let report = runtime.play_turn(TargetSelection::single(1)).await.unwrap();

    assert_eq!(report.deaths, vec![1]);
    // Only the surviving goblin hits.
    assert_eq!(report.snapshot.player_health, 97);
}

#[tokio::test]
async fn enemies_retaliate_in_roster_order() {
    let animator = RecordingAnimator::default();
    let runtime = runtime_with(encounter(&["Skeleton", "Shaman", "Skeleton"]), animator.clone()).await;

    let report = runtime.play_turn(TargetSelection::single(0)).await.unwrap();

    let actors: Vec<usize> = animator
        .cues()
        .into_iter()
        .filter_map(|cue| match cue {
            AnimationCue::EnemyActs { enemy, .. } => Some(enemy),
            _ => None,
        })
        .collect();
    assert_eq!(actors, vec![0, 1, 2]);

    // Fireball left the first skeleton at 2, the shaman mended it by 3.
    assert_eq!(report.snapshot.enemies[0].health, 5);
    assert_eq!(report.snapshot.player_health, 96);
}

#[tokio::test]
async fn later_enemy_sees_earlier_retaliation() {
    let runtime = runtime_with(encounter(&["Goblin", "Goblin"]), NoopAnimator).await;
    let mut combat_rx = runtime.handle().subscribe(Topic::Combat);

    // Shadow bolt leaves both goblins standing.
    runtime.change_spell(2).await.unwrap();
    runtime.play_turn(TargetSelection::single(0)).await.unwrap();

    let mut player_hits = Vec::new();
    while let Ok(Event::Combat(CombatEvent::ActionApplied { action, outcome })) =
        combat_rx.try_recv()
    {
        if let (Action::EnemyAction(_), ActionResult::Effects(effects)) =
            (action, outcome.action_result)
        {
            for effect in effects {
                if let AppliedEffect::Damaged {
                    target: EffectTarget::Player,
                    health_after,
                    ..
                } = effect
                {
                    player_hits.push(health_after);
                }
            }
        }
    }
    assert_eq!(player_hits, vec![97, 94]);
}

#[tokio::test]
async fn lightning_strike_hits_every_selected_enemy() {
    let runtime = runtime_with(encounter(&["Goblin", "Goblin"]), NoopAnimator).await;

    runtime.change_spell(1).await.unwrap();
    let report = runtime
        .play_turn(TargetSelection::many([0, 1]))
        .await
        .unwrap();

    assert!(report.deaths.is_empty());
    assert_eq!(report.snapshot.enemies[0].health, 6);
    assert_eq!(report.snapshot.enemies[1].health, 6);
    assert_eq!(report.snapshot.player_health, 94);
}

#[tokio::test]
async fn slot_cycles_across_turns() {
    let runtime = runtime_with(encounter(&["Skeleton", "Skeleton"]), NoopAnimator).await;
    runtime.change_spell(1).await.unwrap();

    let mut slots = Vec::new();
    for _ in 0..3 {
        slots.push(runtime.play_turn(TargetSelection::single(0)).await.unwrap().snapshot.current_slot);
    }

    assert_eq!(slots, vec![1, 2, 0]);
}

#[tokio::test]
async fn victory_skips_turn_advance() {
    let runtime = runtime_with(encounter(&["Goblin"]), NoopAnimator).await;
    let mut turn_rx = runtime.handle().subscribe(Topic::Turn);

    let report = runtime.play_turn(TargetSelection::single(0)).await.unwrap();

    assert_eq!(report.outcome, TurnOutcome::Victory);
    assert!(report.snapshot.enemies.is_empty());
    assert_eq!(report.snapshot.current_slot, 0);
    assert!(!report.snapshot.player_turn);
    assert_eq!(report.snapshot.player_health, 100);

    let mut events = Vec::new();
    while let Ok(Event::Turn(event)) = turn_rx.try_recv() {
        events.push(event);
    }
    assert!(events.iter().any(|e| matches!(e, TurnEvent::Victory)));
    assert!(!events
        .iter()
        .any(|e| matches!(e, TurnEvent::TurnCompleted { .. })));
}

#[tokio::test]
async fn turn_events_report_deaths_and_completion() {
    let runtime = runtime_with(encounter(&["Goblin", "Goblin"]), NoopAnimator).await;
    let mut turn_rx = runtime.handle().subscribe(Topic::Turn);

    runtime.play_turn(TargetSelection::single(0)).await.unwrap();

    let mut events = Vec::new();
    while let Ok(Event::Turn(event)) = turn_rx.try_recv() {
        events.push(event);
    }
    assert!(events
        .iter()
        .any(|e| matches!(e, TurnEvent::EnemiesDied { indices } if indices == &[0])));
    assert!(matches!(
        events.last(),
        Some(TurnEvent::TurnCompleted { slot: 1 })
    ));
}

#[tokio::test]
async fn describe_uses_current_slot() {
    let mut state = encounter(&["Goblin"]);
    state.current_slot = 1;
    let runtime = runtime_with(state, NoopAnimator).await;

    let text = runtime.describe_current_spell().await.unwrap();

    assert_eq!(text, "Deal 10 (15) damage to the enemy");
}
