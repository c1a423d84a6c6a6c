use nook_core::{
    collect_ids, create_folder, create_item, delete_folder, delete_item, find_folder, find_item,
    Forest, IdAllocator, ItemKind,
};

/// Forest with two roots; the first root has one child folder holding a
/// bookmark, plus a note of its own.
fn sample(ids: &mut IdAllocator) -> Forest {
    let forest = create_folder(Vec::new(), ids, None);
    let root_a = forest[0].id;
    let forest = create_folder(forest, ids, None);
    let forest = create_folder(forest, ids, Some(root_a));
    let child = forest[0].children[0].id;
    let forest = create_item(forest, ids, root_a, ItemKind::Note);
    create_item(forest, ids, child, ItemKind::Bookmark)
}

#[test]
fn create_item_on_missing_folder_is_a_noop() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let unchanged = create_item(forest.clone(), &mut ids, 9999, ItemKind::Task);
    assert_eq!(unchanged, forest);
}

#[test]
fn create_folder_under_missing_parent_is_a_noop() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let unchanged = create_folder(forest.clone(), &mut ids, Some(9999));
    assert_eq!(unchanged, forest);
}

#[test]
fn delete_folder_on_missing_id_is_a_noop() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let unchanged = delete_folder(forest.clone(), 9999);
    assert_eq!(unchanged, forest);
}

#[test]
fn delete_item_on_missing_ids_is_a_noop() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let root_a = forest[0].id;
    let note_id = forest[0].items[0].id;

    // Unknown folder, then unknown item in a known folder.
    assert_eq!(delete_item(forest.clone(), 9999, note_id), forest);
    assert_eq!(delete_item(forest.clone(), root_a, 9999), forest);
}

#[test]
fn create_then_delete_round_trips_to_the_original_forest() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);

    let new_id = ids.peek();
    let grown = create_folder(forest.clone(), &mut ids, None);
    assert_eq!(delete_folder(grown, new_id), forest);
}

#[test]
fn deleting_a_folder_cascades_over_the_whole_subtree() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let root_a = forest[0].id;

    let mut doomed = vec![root_a];
    doomed.push(forest[0].children[0].id);
    doomed.extend(forest[0].items.iter().map(|item| item.id));
    doomed.extend(forest[0].children[0].items.iter().map(|item| item.id));

    let remaining = collect_ids(&delete_folder(forest, root_a));
    for id in doomed {
        assert!(!remaining.contains(&id), "id {id} survived the cascade");
    }
}

#[test]
fn create_item_touches_exactly_one_folder() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let child = forest[0].children[0].id;

    let grown = create_item(forest.clone(), &mut ids, child, ItemKind::Task);

    let before = find_folder(&forest, child).unwrap();
    let after = find_folder(&grown, child).unwrap();
    assert_eq!(after.items.len(), before.items.len() + 1);
    assert_eq!(&after.items[..before.items.len()], &before.items[..]);
    assert_eq!(after.children, before.children);

    // Every other folder is value-equal in content and order.
    assert_eq!(grown[1], forest[1]);
    assert_eq!(grown[0].id, forest[0].id);
    assert_eq!(grown[0].name, forest[0].name);
    assert_eq!(grown[0].items, forest[0].items);
}

#[test]
fn delete_folder_is_idempotent() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let root_a = forest[0].id;

    let once = delete_folder(forest, root_a);
    let twice = delete_folder(once.clone(), root_a);
    assert_eq!(twice, once);
}

#[test]
fn repeated_creates_append_in_call_order() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let root_a = forest[0].id;
    let existing: Vec<_> = forest[0].children.iter().map(|f| f.id).collect();

    let first = ids.peek();
    let forest = create_folder(forest, &mut ids, Some(root_a));
    let second = ids.peek();
    let forest = create_folder(forest, &mut ids, Some(root_a));

    let children: Vec<_> = find_folder(&forest, root_a)
        .unwrap()
        .children
        .iter()
        .map(|f| f.id)
        .collect();
    let mut expected = existing;
    expected.push(first);
    expected.push(second);
    assert_eq!(children, expected);
}

#[test]
fn delete_item_leaves_other_folders_untouched() {
    let mut ids = IdAllocator::new();
    let forest = sample(&mut ids);
    let child = forest[0].children[0].id;
    let bookmark_id = forest[0].children[0].items[0].id;

    let pruned = delete_item(forest.clone(), child, bookmark_id);
    assert!(find_item(&pruned, bookmark_id).is_none());
    assert_eq!(pruned[0].items, forest[0].items);
    assert_eq!(pruned[1], forest[1]);
}

// The end-to-end walk: empty forest, root folder, task, child folder, then
// one cascading delete back to empty.
#[test]
fn scenario_build_up_and_tear_down() {
    let mut ids = IdAllocator::new();

    let forest = create_folder(Vec::new(), &mut ids, None);
    assert_eq!(forest.len(), 1);
    let root = forest[0].id;
    assert!(forest[0].children.is_empty());
    assert!(forest[0].items.is_empty());

    let forest = create_item(forest, &mut ids, root, ItemKind::Task);
    assert_eq!(forest[0].items.len(), 1);
    assert_eq!(forest[0].items[0].kind, ItemKind::Task);
    assert!(forest[0].children.is_empty());

    let forest = create_folder(forest, &mut ids, Some(root));
    assert_eq!(forest[0].children.len(), 1);
    assert_eq!(forest[0].items.len(), 1);
    assert!(forest[0].children[0].children.is_empty());
    assert!(forest[0].children[0].items.is_empty());

    let forest = delete_folder(forest, root);
    assert!(forest.is_empty());
}
