use std::time::Duration;

use anyhow::{Context, Result};

use sprocket_canvas::prelude::*;
use sprocket_engine::assets::FsAssetLoader;
use sprocket_engine::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent, PointerTracker,
};
use sprocket_engine::logging::{init_logging, LoggingConfig};
use sprocket_engine::time::FrameClock;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 240.0;
const RUN_FOR: Duration = Duration::from_secs(4);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut canvas = Canvas::new(CanvasConfig::default());
    canvas.layout(WIDTH, HEIGHT);

    let red = SpriteBuilder::new(Ball::new(10.0).with_color(Color::rgba(0.9, 0.2, 0.2, 1.0)))
        .position(20.0, 30.0)
        .heading(20.0)
        .speed(6.0)
        .interval_ms(30)
        .attach(&mut canvas)
        .context("adding red ball")?;
    let blue = SpriteBuilder::new(Ball::new(14.0).with_color(Color::rgba(0.2, 0.3, 0.9, 1.0)))
        .position(250.0, 150.0)
        .heading(200.0)
        .speed(4.0)
        .interval_ms(30)
        .attach(&mut canvas)
        .context("adding blue ball")?;
    log::info!("scene: red={red} blue={blue}");

    canvas.set_text_alignment(TextAlign::Center);
    canvas.draw_text("sprocket", WIDTH / 2.0, 20.0);
    canvas.set_paint_color(Color::rgba(0.6, 0.6, 0.6, 1.0));
    canvas.draw_line(0.0, HEIGHT / 2.0, WIDTH, HEIGHT / 2.0);

    // An optional picture path on the command line adds an image sprite.
    if let Some(picture) = std::env::args().nth(1) {
        let loader = FsAssetLoader::new(".");
        let kitty = SpriteBuilder::new(ImageSprite::with_picture(&picture, &loader))
            .position(140.0, 100.0)
            .attach(&mut canvas)
            .context("adding image sprite")?;
        log::info!("{kitty} shows {picture}");
    }

    let mut handlers = |canvas: &mut Canvas, target: ComponentId, event: &Event| -> bool {
        log::info!("{target:?} {} {:?}", event.name(), event.args());
        match (target, event) {
            (ComponentId::Sprite(id), Event::EdgeReached { edge }) => {
                if let Some(mut sprite) = canvas.sprite_mut(id) {
                    sprite.bounce(*edge);
                }
                true
            }
            (ComponentId::Sprite(id), Event::CollidedWith { other }) => {
                if let Some(mut sprite) = canvas.sprite_mut(id) {
                    sprite.point_towards(*other);
                    let away = sprite.get().heading() + 180.0;
                    sprite.set_heading(away);
                }
                true
            }
            (ComponentId::Sprite(id), Event::Dragged { current, .. }) => {
                if let Some(mut sprite) = canvas.sprite_mut(id) {
                    sprite.move_to(current.x, current.y);
                }
                true
            }
            (ComponentId::Canvas, Event::CanvasTouched { x, y, .. }) => {
                canvas.draw_circle(*x, *y, 3.0);
                true
            }
            _ => false,
        }
    };

    let mut tracker = PointerTracker::new();
    let script = drag_script();
    let mut clock = FrameClock::new();
    let mut elapsed = Duration::ZERO;
    let mut draw_list = DrawList::new();
    let mut frames_painted = 0u64;

    while elapsed < RUN_FOR {
        std::thread::sleep(FRAME);
        let frame = clock.tick();
        elapsed += frame.dt;

        for (_, input) in script.iter().filter(|(at, _)| *at <= elapsed && *at > elapsed - frame.dt) {
            if let Some(motion) = tracker.apply_event(*input) {
                canvas.post_motion(motion);
            }
        }

        canvas.advance(frame.dt, &mut handlers);
        if canvas.needs_redraw() {
            draw_list.clear();
            canvas.paint(&mut draw_list);
            frames_painted += 1;
        }
    }

    for sprite in canvas.sprites() {
        log::info!(
            "{} ended at ({:.1}, {:.1}) heading {:.1}",
            sprite.id(),
            sprite.x(),
            sprite.y(),
            sprite.heading()
        );
    }
    log::info!("painted {frames_painted} frames, last with {} commands", draw_list.len());
    Ok(())
}

/// Mouse input replayed against the canvas: a press on the red ball's start
/// position, a drag across the canvas, and a tap on empty space.
fn drag_script() -> Vec<(Duration, InputEvent)> {
    let press = |x, y| {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    };
    let release = |x, y| {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    };
    let to = |x, y| InputEvent::PointerMoved(PointerMoveEvent { x, y });
    let at = Duration::from_millis;

    vec![
        (at(500), to(40.0, 50.0)),
        (at(520), press(40.0, 50.0)),
        (at(700), to(90.0, 60.0)),
        (at(900), to(140.0, 80.0)),
        (at(1100), to(180.0, 120.0)),
        (at(1150), release(180.0, 120.0)),
        (at(2500), to(300.0, 20.0)),
        (at(2520), press(300.0, 20.0)),
        (at(2600), release(300.0, 20.0)),
    ]
}
