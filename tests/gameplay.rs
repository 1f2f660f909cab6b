use brick_breaker::renderer::{DrawCommand, render};
use brick_breaker::sim::*;
use brick_breaker::{GameConfig, InputAdapter, Key};
use glam::Vec2;

/// Score always matches the number of destroyed bricks
fn assert_score_consistent(state: &GameState) {
    let destroyed = (state.bricks.len() - state.bricks.alive_count()) as u64;
    assert_eq!(state.score, destroyed * state.config.points_per_brick);
}

#[test]
fn test_keyboard_drives_paddle_and_serve() {
    let mut state = GameState::default();
    let mut input = InputAdapter::new(state.config.surface.width, state.config.paddle.speed);
    let x0 = state.paddle.pos.x;

    input.key_down(Key::Right);
    tick(&mut state, &input.take_tick_input());
    tick(&mut state, &input.take_tick_input());
    assert_eq!(state.paddle.pos.x, x0 + 12.0);
    assert_eq!(state.status, GameStatus::NotStarted);

    input.key_up(Key::Right);
    input.key_down(Key::Start);
    let events = tick(&mut state, &input.take_tick_input());
    assert!(events.contains(&GameEvent::Started));
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.paddle.pos.x, x0 + 12.0);
}

#[test]
fn test_pointer_outside_surface_is_ignored() {
    let mut state = GameState::default();
    let mut input = InputAdapter::new(state.config.surface.width, state.config.paddle.speed);
    let x0 = state.paddle.pos.x;

    input.pointer_move(-10.0);
    input.pointer_move(900.0);
    tick(&mut state, &input.take_tick_input());
    assert_eq!(state.paddle.pos.x, x0);

    input.pointer_move(480.0);
    tick(&mut state, &input.take_tick_input());
    assert_eq!(state.paddle.pos.x, 420.0);
}

#[test]
fn test_losing_every_life_then_restart() {
    let mut state = GameState::default();
    let mut lives_lost = 0;

    for _ in 0..10_000 {
        if state.status.is_ended() {
            break;
        }
        // Keep the paddle on the far side so the ball always drops through
        let away = if state.ball.pos.x < 250.0 { 460.0 } else { 40.0 };
        let input = TickInput {
            paddle_dx: 0.0,
            pointer_x: Some(away),
            start: true,
        };
        let before = state.lives;
        for event in tick(&mut state, &input) {
            if let GameEvent::LifeLost { remaining } = event {
                lives_lost += 1;
                assert_eq!(remaining, before - 1);
            }
        }
        assert_score_consistent(&state);
    }

    assert_eq!(lives_lost, 3);
    assert_eq!(state.lives, 0);
    assert_eq!(state.status, GameStatus::Ended(EndReason::Lost));

    // Start trigger is ignored once ended
    let frozen = state.ball.pos;
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    assert_eq!(state.status, GameStatus::Ended(EndReason::Lost));
    assert_eq!(state.ball.pos, frozen);

    state.reset();
    assert_eq!(state.status, GameStatus::NotStarted);
    assert_eq!(state.lives, 3);
    assert_eq!(state.score, 0);
    assert_eq!(state.bricks.alive_count(), 48);
    assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));
}

#[test]
fn test_win_only_on_last_brick() {
    let mut config = GameConfig::default();
    config.bricks.rows = 1;
    config.bricks.cols = 2;
    let mut state = GameState::new(config);
    state.start();

    // Drop onto brick (0, 0) from above
    state.ball.pos = Vec2::new(40.0, 50.0);
    state.ball.vel = Vec2::new(0.0, 3.0);
    tick(&mut state, &TickInput::default());
    assert_eq!(state.score, 10);
    assert_eq!(state.status, GameStatus::Running);

    // Then onto brick (0, 1)
    state.ball.pos = Vec2::new(100.0, 50.0);
    state.ball.vel = Vec2::new(0.0, 3.0);
    let events = tick(&mut state, &TickInput::default());
    assert_eq!(state.score, 20);
    assert_eq!(state.status, GameStatus::Ended(EndReason::Won));
    assert!(events.contains(&GameEvent::Won));

    let frame = render(&state);
    let messages: Vec<_> = frame
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(messages.contains(&"Cleared!"));
}

#[test]
fn test_autopilot_game_keeps_invariants() {
    let mut state = GameState::default();
    let mut pilot = Autopilot::new(1234);
    let max_x = state.config.surface.width - state.paddle.size.x;

    for _ in 0..50_000 {
        if state.status.is_ended() {
            break;
        }
        let lives = state.lives;
        let input = pilot.input(&state);
        for event in tick(&mut state, &input) {
            if let GameEvent::PaddleHit { .. } = event {
                assert!(state.ball.vel.x.abs() >= 1.0);
                assert!(state.ball.vel.y <= 0.0);
            }
        }

        assert!(state.paddle.pos.x >= 0.0 && state.paddle.pos.x <= max_x);
        assert!(state.lives == lives || state.lives + 1 == lives);
        assert_score_consistent(&state);
        if state.status == GameStatus::Ended(EndReason::Won) {
            assert_eq!(state.bricks.alive_count(), 0);
        }
    }

    assert!(state.score > 0);
}
