/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_pagerank;
extern crate rand;
use lib_pagerank::pagerank::algorithms::power_iteration::PowerIteration;
use lib_pagerank::pagerank::error::PRResult;
use lib_pagerank::pagerank::generator::{
    generate_internet, generate_internet_with_rng, generate_internet_with_seed,
};
use lib_pagerank::pagerank::link_matrix::STOCHASTIC_EPS;
use lib_pagerank::pagerank::test_utils::assert_close;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_generated_internet_is_column_stochastic() -> PRResult<()> {
    for n in &[1, 2, 5, 10, 100] {
        let l = generate_internet(*n)?;
        assert_eq!(l.num_pages(), *n);
        assert!(l.is_column_stochastic(STOCHASTIC_EPS));
        assert!(l.dangling_pages().is_empty());
        assert!(l.as_matrix().iter().all(|x| *x > 0.0 && *x <= 1.0));
    }
    Ok(())
}

#[test]
fn test_seeded_generation_is_reproducible() -> PRResult<()> {
    let a = generate_internet_with_seed(20, 7)?;
    let b = generate_internet_with_seed(20, 7)?;
    assert_eq!(a, b);
    let mut rng = StdRng::seed_from_u64(7);
    let c = generate_internet_with_rng(20, &mut rng)?;
    assert_eq!(a, c);
    Ok(())
}

#[test]
fn test_generated_internet_is_clustered() -> PRResult<()> {
    // links are drawn against the page distance, so the diagonal band is
    // denser than the far corners
    let l = generate_internet_with_seed(60, 3)?;
    let m = l.as_matrix();
    let mut near = 0;
    let mut far = 0;
    for j in 0..60 {
        let column = m.column(j);
        // a page that drew no links spreads evenly; skip it
        if column.iter().all(|x| *x > 1e-6) {
            continue;
        }
        for i in 0..60 {
            if column[i] > 1e-6 {
                let distance = (i as i64 - j as i64).abs();
                if distance <= 2 {
                    near += 1;
                } else if distance >= 30 {
                    far += 1;
                }
            }
        }
    }
    assert!(near > far, "near = {}, far = {}", near, far);
    Ok(())
}

#[test]
fn test_solver_accepts_generated_internet() -> PRResult<()> {
    let l = generate_internet_with_seed(100, 11)?;
    let result = PowerIteration::new().with_damping(0.9).run(&l);
    assert_eq!(result.ranks.len(), 100);
    assert_close(result.total_mass(), 100.0, 1e-6);
    assert!(result.ranks.iter().all(|r| *r > 0.0));
    Ok(())
}

#[test]
fn test_empty_internet_is_rejected() {
    assert!(generate_internet(0).unwrap_err().is_dimension_error());
}
