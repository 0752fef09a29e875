use crate::{
    ball::Ball,
    scene::{Scene, WorldSize},
    vector::vec2,
};

/// Returns null if the world size is invalid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_Create(
    count: usize,
    width: f64,
    height: f64,
    seed: u64,
) -> *mut Scene {
    let mut rng = fastrand::Rng::with_seed(seed);
    match Scene::setup(count, WorldSize::new(width, height), &mut rng) {
        Ok(scene) => Box::into_raw(Box::new(scene)),
        Err(err) => {
            log::error!("Scene_Create: {err}");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_Destroy(handle: *mut Scene) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_Step(handle: *mut Scene) {
    if let Some(scene) = unsafe { handle.as_mut() } {
        scene.step();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_Reset(handle: *mut Scene, count: usize, seed: u64) -> bool {
    let Some(scene) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    let mut rng = fastrand::Rng::with_seed(seed);
    match scene.reset(count, &mut rng) {
        Ok(()) => true,
        Err(err) => {
            log::error!("Scene_Reset: {err}");
            false
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_SetPaused(handle: *mut Scene, paused: bool) {
    if let Some(scene) = unsafe { handle.as_mut() } {
        scene.set_paused(paused);
    }
}

/// Returns the new paused state, or false for a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_TogglePause(handle: *mut Scene) -> bool {
    unsafe { handle.as_mut() }.is_some_and(|scene| scene.toggle_pause())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_GetBallCount(handle: *const Scene) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |scene| scene.balls.len())
}

/// Valid until the next call that mutates the scene.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_GetBalls(handle: *const Scene) -> *const Ball {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |scene| scene.balls.as_ptr())
}

/// Returns false if the handle is null or the ball is rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Scene_AddBall(
    handle: *mut Scene,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    mass: f64,
    radius: f64,
) -> bool {
    let Some(scene) = (unsafe { handle.as_mut() }) else {
        return false;
    };
    let ball = Ball::new(radius, mass, vec2(x, y), vec2(vx, vy));
    scene.add_ball(ball).is_ok()
}
