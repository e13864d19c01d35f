use bevy::prelude::*;
use constants::render_settings::TITLE_FONT_SIZE;

/// Overlay showing the configured model title once the model is framed.
#[derive(Component)]
pub struct ModelTitle;

pub fn spawn_title_overlay(commands: &mut Commands, title: &str) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                ModelTitle,
                Text::new(title),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(16.0),
                    left: Val::Px(20.0),
                    ..default()
                },
                Visibility::Hidden,
            ));
        });
}

pub fn reveal_title(titles: &mut Query<&mut Visibility, With<ModelTitle>>) {
    for mut visibility in titles.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}
