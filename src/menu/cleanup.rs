use super::*;

/// Despawn everything the run spawned and reset per-run resources, so the next
/// run (or the main menu) starts clean.
///
/// Runs on `OnExit(GameOver)`, after the overlay is gone.  The high score is
/// kept.
pub fn cleanup_game_world(
    mut commands: Commands,
    scene: Query<Entity, With<SceneEntity>>,
    mut session: ResMut<Session>,
    mut timers: ResMut<SpawnTimers>,
    mut active_shield: ResMut<ActiveShield>,
) {
    let mut despawned = 0usize;
    for entity in scene.iter() {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    *session = Session::default();
    timers.cancel();
    *active_shield = ActiveShield::default();
    debug!("Scene torn down ({despawned} entities)");
}
