//! UI plugin - score display, game over screen, and the restart button.

use bevy::prelude::*;

use crate::game::{
    BUTTON_COLOR, GameOverUI, GameSet, HudUI, OVERLAY_COLOR, OverlayText, RestartButton,
};
use crate::rendering::{Frame, Overlay};

/// Plugin for UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_hud, spawn_game_over_screen))
            .add_systems(
                Update,
                update_overlay
                    .run_if(resource_changed::<Frame>)
                    .in_set(GameSet::Render),
            );
    }
}

// Type aliases for the two overlay roots
type HudVisibility<'w, 's> =
    Query<'w, 's, &'static mut Visibility, (With<HudUI>, Without<GameOverUI>)>;
type GameOverVisibility<'w, 's> =
    Query<'w, 's, &'static mut Visibility, (With<GameOverUI>, Without<HudUI>)>;

/// Startup system spawning the score and high score in the top-left corner.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("Score: 0"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                OverlayText::Score,
            ));
            parent.spawn((
                Text::from("High Score: 0"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                OverlayText::HighScore,
            ));
        });
}

/// Startup system spawning the (hidden) game over screen.
fn spawn_game_over_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            Visibility::Hidden,
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("Game Over"),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Score: 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                OverlayText::FinalScore,
            ));

            parent.spawn((
                Text::from("High Score: 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
                OverlayText::FinalHighScore,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(BUTTON_COLOR),
                    RestartButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::from("Play Again"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

/// System to show the overlay matching the current frame.
fn update_overlay(
    frame: Res<Frame>,
    mut hud: HudVisibility,
    mut game_over: GameOverVisibility,
    mut texts: Query<(&mut Text, &OverlayText)>,
) {
    let Some(overlay) = frame.overlay() else {
        return;
    };

    let (score, highscore, playing) = match overlay {
        Overlay::Hud { score, highscore } => (score, highscore, true),
        Overlay::GameOver { score, highscore } => (score, highscore, false),
    };

    for mut visibility in hud.iter_mut() {
        *visibility = if playing {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    for mut visibility in game_over.iter_mut() {
        *visibility = if playing {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }

    for (mut text, role) in texts.iter_mut() {
        *text = Text::from(match role {
            OverlayText::Score | OverlayText::FinalScore => format!("Score: {}", score),
            OverlayText::HighScore | OverlayText::FinalHighScore => {
                format!("High Score: {}", highscore)
            }
        });
    }
}
