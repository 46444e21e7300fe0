use heart_particles::physic_engine::{PhysicEngine, PhysicEngineHeart};
use heart_particles::renderer_engine::{RendererEngine, SoftwareRenderer, Sprite};
use heart_particles::AnimationError;
use rand::rngs::StdRng;
use rand::SeedableRng;
mod helpers;
use helpers::test_settings;

fn setup(width: u32, height: u32) -> (SoftwareRenderer, PhysicEngineHeart<StdRng>) {
    let settings = test_settings();
    let renderer = SoftwareRenderer::new(width, height, &settings).unwrap();
    let physic = PhysicEngineHeart::with_rng(
        &settings,
        width as f32,
        height as f32,
        StdRng::seed_from_u64(7),
    )
    .unwrap();
    (renderer, physic)
}

#[test]
fn test_zero_sized_surface_fails_at_init() {
    let err = SoftwareRenderer::new(0, 600, &test_settings()).err().unwrap();
    assert_eq!(
        err.downcast_ref::<AnimationError>(),
        Some(&AnimationError::SurfaceUnavailable {
            width: 0,
            height: 600
        })
    );
}

#[test]
fn test_unbuildable_sprite_fails_at_init() {
    let mut settings = test_settings();
    settings.sprite_size = 0;
    let err = SoftwareRenderer::new(800, 600, &settings).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<AnimationError>(),
        Some(AnimationError::SpriteUnavailable { size: 0 })
    ));
}

#[test]
fn test_render_frame_draws_active_particles() {
    let (mut renderer, mut physic) = setup(800, 600);

    assert_eq!(renderer.render_frame(&physic), 0);
    assert!(renderer.framebuffer().is_blank());

    physic.update(0.125);
    let drawn = renderer.render_frame(&physic);
    assert_eq!(drawn, physic.particles().len());
    assert!(!renderer.framebuffer().is_blank());
    assert_eq!(renderer.frames(), 2);
}

#[test]
fn test_render_frame_clears_previous_content() {
    let (mut renderer, mut physic) = setup(400, 400);
    physic.update(0.125);
    renderer.render_frame(&physic);
    assert!(!renderer.framebuffer().is_blank());

    // tout expire : la frame suivante est vide
    physic.update(1.0);
    assert!(physic.particles().is_empty());
    renderer.render_frame(&physic);
    assert!(renderer.framebuffer().is_blank());
}

#[test]
fn test_resize_reallocates_without_residue() {
    let (mut renderer, mut physic) = setup(800, 600);
    physic.update(0.125);
    renderer.render_frame(&physic);

    renderer.set_window_size(400, 300);
    assert_eq!(renderer.surface_size(), (400, 300));
    assert_eq!(renderer.framebuffer().as_raw().len(), 400 * 300 * 4);
    assert!(renderer.framebuffer().is_blank());
    assert_eq!(renderer.viewport().resize_count(), 2);
    assert_eq!(renderer.viewport().center().x, 200.0);

    // même taille : nouvelle allocation quand même
    renderer.set_window_size(400, 300);
    assert_eq!(renderer.viewport().resize_count(), 3);

    // le pool n'est pas touché par le redimensionnement
    assert_eq!(physic.particles().len(), 125);
}

#[test]
fn test_degenerate_resize_disables_drawing() {
    let (mut renderer, mut physic) = setup(800, 600);
    renderer.set_window_size(0, 0);
    assert!(renderer.viewport().is_degenerate());

    physic.update(0.125);
    renderer.render_frame(&physic);
    assert!(renderer.framebuffer().is_blank());

    renderer.set_window_size(800, 600);
    renderer.render_frame(&physic);
    assert!(!renderer.framebuffer().is_blank());
}

#[test]
fn test_rebuild_sprite_changes_color() -> anyhow::Result<()> {
    let (mut renderer, _) = setup(100, 100);
    let mut settings = test_settings();
    settings.sprite_size = 16;
    settings.sprite_color = [0, 0, 255, 255];
    renderer.rebuild_sprite(&settings)?;

    assert_eq!(renderer.sprite().width(), 16);
    assert_eq!(renderer.sprite().pixel(8, 8), [0, 0, 255, 255]);
    Ok(())
}

#[test]
fn test_screenshot_is_written() -> anyhow::Result<()> {
    let (mut renderer, mut physic) = setup(200, 200);
    physic.update(0.125);
    renderer.render_frame(&physic);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("frame.png");
    renderer.save_screenshot(&path)?;

    let image = image::open(&path)?.to_rgba8();
    assert_eq!(image.dimensions(), (200, 200));
    Ok(())
}

#[test]
fn test_sprite_outline_is_closed_heart() {
    let outline = Sprite::outline(30);
    assert!(outline.len() > 600);
    let first = outline[0];
    let last = outline[outline.len() - 1];
    assert!((first - last).length() < 0.5);
}
