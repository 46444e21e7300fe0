use heart_particles::physic_engine::ParticlesPool;
use heart_particles::renderer_engine::Sprite;
use heart_particles::AnimationError;
use std::collections::{HashMap, HashSet};
mod helpers;
use helpers::RecordingSurface;

fn sprite() -> Sprite {
    Sprite::build(30, [0xea, 0x80, 0xb0, 0xff]).unwrap()
}

#[test]
fn test_pool_rejects_invalid_parameters() {
    let err = ParticlesPool::new(0, 2.0, -0.75).unwrap_err();
    assert!(matches!(
        err,
        AnimationError::InvalidSettings {
            field: "capacity",
            ..
        }
    ));
    assert!(ParticlesPool::new(10, 0.0, -0.75).is_err());
    assert!(ParticlesPool::new(10, f32::NAN, -0.75).is_err());
}

#[test]
fn test_active_count_never_exceeds_capacity() {
    let mut pool = ParticlesPool::new(8, 1.0, -0.75).unwrap();
    for i in 0..100 {
        pool.add(i as f32, 0.0, 1.0, 0.0);
        assert!(pool.len() <= pool.capacity());
        if i % 7 == 0 {
            pool.update(0.05);
        }
    }
    assert_eq!(pool.len(), 8);
}

#[test]
fn test_overflow_evicts_oldest() {
    // capacité 4, cinq ajouts : A est écrasée, B..E restent
    let mut pool = ParticlesPool::new(4, 1.0, -0.75).unwrap();
    let mut evictions = 0;
    for (i, _) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        if pool.add(i as f32, 0.0, 0.0, 0.0) {
            evictions += 1;
        }
    }
    assert_eq!(evictions, 1);
    assert_eq!(pool.len(), 4);

    let xs: Vec<f32> = pool.iter_active().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_ages_non_decreasing_from_newest_to_oldest() {
    let mut pool = ParticlesPool::new(16, 10.0, -0.75).unwrap();
    for i in 0..40 {
        pool.add(0.0, 0.0, 1.0, 1.0);
        pool.update(0.01 * (i % 3 + 1) as f32);
    }
    let ages: Vec<f32> = pool.iter_active().map(|p| p.age).collect();
    // itération de la plus ancienne à la plus récente
    assert!(ages.windows(2).all(|w| w[0] >= w[1]), "ages: {ages:?}");
}

#[test]
fn test_each_particle_ages_until_retired() {
    // l'abscisse sert d'identifiant d'insertion
    let mut pool = ParticlesPool::new(8, 1.0, -0.75).unwrap();
    let mut next_id = 0u32;
    let mut ages: HashMap<u32, f32> = HashMap::new();
    let mut retired: HashSet<u32> = HashSet::new();

    for step in 0..30 {
        if step % 2 == 0 {
            pool.add(next_id as f32, 0.0, 0.0, 0.0);
            next_id += 1;
        }
        pool.update(0.1);

        let alive: HashMap<u32, f32> = pool
            .iter_active()
            .map(|p| (p.position.x as u32, p.age))
            .collect();
        for (id, &age) in &alive {
            assert!(!retired.contains(id), "particle {id} came back");
            if let Some(&before) = ages.get(id) {
                assert!(age >= before, "particle {id}: {before} -> {age}");
            }
            assert!(age < 1.0, "particle {id} should have been retired (age {age})");
        }

        retired.extend(ages.keys().filter(|id| !alive.contains_key(id)));
        ages = alive;
    }
    assert!(!retired.is_empty());
    assert_eq!(pool.len() + retired.len(), next_id as usize);
}

#[test]
fn test_expired_particles_are_retired() {
    let mut pool = ParticlesPool::new(10, 1.0, -0.75).unwrap();
    pool.add(0.0, 0.0, 10.0, 0.0);
    assert_eq!(pool.update(0.5), 0);
    assert_eq!(pool.len(), 1);
    // âge 1.1 >= durée 1.0
    assert_eq!(pool.update(0.6), 1);
    assert!(pool.is_empty());
}

#[test]
fn test_retirement_keeps_younger_particles() {
    let mut pool = ParticlesPool::new(10, 1.0, -0.75).unwrap();
    pool.add(0.0, 0.0, 0.0, 0.0);
    pool.update(0.75);
    pool.add(1.0, 0.0, 0.0, 0.0);
    assert_eq!(pool.update(0.5), 1);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.iter_active().next().unwrap().position.x, 1.0);
}

#[test]
fn test_update_integrates_motion() {
    let mut pool = ParticlesPool::new(4, 2.0, -0.75).unwrap();
    pool.add(0.0, 0.0, 100.0, 0.0);
    pool.update(0.5);

    let p = pool.iter_active().next().unwrap();
    // position avec la vitesse d'avant le pas, puis vitesse amortie
    assert!((p.position.x - 50.0).abs() < 1e-4);
    assert!((p.velocity.x - 62.5).abs() < 1e-4);
    assert!((p.age - 0.5).abs() < 1e-6);
}

#[test]
fn test_draw_on_empty_pool_does_nothing() {
    let pool = ParticlesPool::new(4, 2.0, -0.75).unwrap();
    let mut surface = RecordingSurface::new(100, 100);
    assert_eq!(pool.draw(&mut surface, &sprite()), 0);
    assert!(surface.calls.is_empty());
}

#[test]
fn test_draw_order_size_and_opacity() {
    let mut pool = ParticlesPool::new(4, 2.0, -0.75).unwrap();
    pool.add(10.0, 10.0, 0.0, 0.0);
    pool.update(1.0);
    pool.add(20.0, 20.0, 0.0, 0.0);

    let mut surface = RecordingSurface::new(100, 100);
    assert_eq!(pool.draw(&mut surface, &sprite()), 2);

    let older = surface.calls[0];
    let newer = surface.calls[1];
    assert_eq!(older.center.x, 10.0);
    assert_eq!(newer.center.x, 20.0);

    // âge 1.0 sur 2.0 : ease(0.5) = 0.875, opacité 0.5
    assert!((older.size - 30.0 * 0.875).abs() < 1e-4);
    assert!((older.alpha - 0.5).abs() < 1e-6);
    // particule neuve : taille nulle, opacité pleine
    assert_eq!(newer.size, 0.0);
    assert_eq!(newer.alpha, 1.0);

    for call in &surface.calls {
        assert!((0.0..=1.0).contains(&call.alpha));
    }
}
