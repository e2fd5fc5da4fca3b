//! Tests for excitation generation

use super::*;

#[test]
fn test_h2_uccsd_excitations() {
    let mut ucc = Ucc::uccsd(2, (1, 1));
    assert!(ucc.excitation_list().is_none());
    assert_eq!(ucc.num_parameters(), None);

    ucc.build_operators();

    let expected = vec![
        Excitation::single(0, 1),
        Excitation::single(2, 3),
        Excitation::double([0, 2], [1, 3]),
    ];
    assert_eq!(ucc.excitation_list(), Some(expected.as_slice()));
    assert_eq!(ucc.num_parameters(), Some(3));
}

#[test]
fn test_doubles_skip_overlapping_singles() {
    let doubles = generate_fermionic_excitations(2, 3, (1, 1), None);

    // Two alpha (or two beta) singles always share the occupied orbital.
    assert_eq!(doubles.len(), 4);
    assert!(doubles.iter().all(Excitation::is_double));
    assert!(doubles.contains(&Excitation::double([0, 3], [2, 5])));
    assert!(doubles
        .iter()
        .all(|d| d.occupied[0] < 3 && d.occupied[1] >= 3));
}

#[test]
fn test_same_spin_doubles_are_deduplicated() {
    let doubles = generate_fermionic_excitations(2, 4, (2, 2), None);
    // one alpha-alpha, one beta-beta, 4 x 4 mixed
    assert_eq!(doubles.len(), 18);
    assert_eq!(
        doubles
            .iter()
            .filter(|d| **d == Excitation::double([0, 1], [2, 3]))
            .count(),
        1
    );

    let mixed_only = generate_fermionic_excitations(2, 4, (2, 2), Some(1));
    assert_eq!(mixed_only.len(), 16);
    assert!(!mixed_only.contains(&Excitation::double([0, 1], [2, 3])));
}

#[test]
fn test_no_excitations_without_virtual_orbitals() {
    assert!(generate_fermionic_excitations(1, 2, (2, 2), None).is_empty());
    assert!(generate_fermionic_excitations(0, 2, (1, 1), None).is_empty());
}

#[test]
fn test_changing_particles_discards_excitations() {
    let mut ucc = Ucc::new(3, (1, 1), "d".parse().unwrap());
    ucc.build_operators();
    assert_eq!(ucc.num_parameters(), Some(4));

    ucc.set_num_particles((2, 2));
    assert!(ucc.excitation_list().is_none());
    ucc.build_operators();
    assert_eq!(ucc.num_parameters(), Some(4));
    assert_eq!(ucc.num_particles(), (2, 2));
}

#[test]
fn test_excitation_kinds_parsing() {
    let kinds: ExcitationKinds = "sd".parse().unwrap();
    assert_eq!(kinds.orders(), &[1, 2]);
    assert_eq!(kinds.to_string(), "sd");

    let kinds: ExcitationKinds = "DDt".parse().unwrap();
    assert_eq!(kinds.orders(), &[2, 3]);

    assert_eq!(
        "sx".parse::<ExcitationKinds>().unwrap_err(),
        crate::error::InitialPointError::InvalidExcitationKind("sx".to_string())
    );
    assert!("".parse::<ExcitationKinds>().is_err());
}

#[test]
fn test_excitation_shape_queries() {
    let double = Excitation::double([0, 2], [1, 3]);
    assert!(double.is_double());
    assert_eq!(double.order(), 2);
    assert_eq!(double.indices().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
    assert_eq!(double.to_string(), "([0, 2], [1, 3])");

    assert!(!Excitation::single(0, 1).is_double());
    assert!(!Excitation::new(vec![0, 1, 2], vec![3, 4, 5]).is_double());
    assert!(!Excitation::new(vec![0, 1], vec![3]).is_double());
}

#[test]
fn test_excitation_reads_from_pair_notation() {
    let excitations: Vec<Excitation> = serde_yml::from_str("- [[0], [1]]\n- [[0, 2], [1, 3]]\n").unwrap();
    assert_eq!(
        excitations,
        vec![Excitation::single(0, 1), Excitation::double([0, 2], [1, 3])]
    );
}
