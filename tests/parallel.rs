use allowlist_merkle::prelude::*;

fn ids(values: &[u64]) -> Vec<Identifier> {
    values.iter().copied().map(Identifier::from).collect()
}

#[test]
fn parallel_extraction_matches_sequential_proofs() {
    let values: Vec<u64> = (0..1025).map(|i| i * 31 + 7).collect();
    let allowlist = Allowlist::build(&ids(&values)).unwrap();

    let set = LeafSet::canonicalize(&ids(&values)).unwrap();
    let index = set.position_index();
    let layers = Layers::build(set.as_slice()).unwrap();

    assert_eq!(allowlist.root(), layers.root());
    assert_eq!(allowlist.len(), 1025);
    assert_eq!(allowlist.max_proof_length(), 11);

    for (leaf, proof) in allowlist.proofs() {
        let expected = extract_proof(leaf, &index, &layers).unwrap();
        assert_eq!(proof, &expected);
        assert!(verify(allowlist.root(), leaf, proof));
    }
}

#[test]
fn parallel_build_keeps_canonical_order() {
    let allowlist = Allowlist::build(&ids(&[50, 3, 700, 3, 12])).unwrap();

    let order: Vec<_> = allowlist
        .into_output()
        .proofs
        .into_iter()
        .map(|(id, _)| id)
        .collect();

    assert_eq!(order, ids(&[3, 12, 50, 700]));
}
