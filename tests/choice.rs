use randgen::{RandomError, choice, secure_string};

#[test]
fn choice_returns_member() {
    let items: Vec<String> = (1..=1000).map(|n| secure_string(n).unwrap()).collect();

    for _ in 0..1000 {
        let pick = choice(&items).unwrap();
        assert!(items.contains(pick));
    }
}

#[test]
fn choice_single_element() {
    let items = ["only"];
    assert_eq!(*choice(&items).unwrap(), "only");
}

#[test]
fn choice_reaches_every_element() {
    let items = ["a", "b", "c"];
    let mut seen = [false; 3];

    for _ in 0..1000 {
        let pick = choice(&items).unwrap();
        let idx = items.iter().position(|i| i == pick).unwrap();
        seen[idx] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn choice_empty_is_invalid() {
    let items: Vec<String> = Vec::new();

    assert!(matches!(
        choice(&items),
        Err(RandomError::InvalidArgument(_))
    ));
}
