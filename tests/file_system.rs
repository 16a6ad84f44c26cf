use memtree::{
    testing,
    AddError,
    Cursor,
    Directory,
    File,
    FileSystem,
    GetError,
    Measure,
    Named,
    Node,
    RemoveError,
};
use rstest::{
    fixture,
    rstest,
};

#[fixture]
fn fs() -> FileSystem {
    testing::init_test_setup();

    FileSystem::default()
}

fn names(dir: &Directory) -> Vec<(String, bool)> {
    dir.children()
        .map(|child| (child.name().to_owned(), child.is_dir()))
        .collect()
}

fn sum_of_children(dir: &Directory) -> u64 {
    dir.children()
        .map(|child| match child {
            Node::File(file) => file.size(),
            Node::Directory(dir) => dir.total_size(),
        })
        .fold(0, u64::saturating_add)
}

fn assert_aggregates(dir: &Directory) {
    assert_eq!(dir.total_size(), sum_of_children(dir));

    dir.children()
        .filter_map(Node::as_dir)
        .for_each(assert_aggregates);
}

#[rstest]
fn empty_fs(fs: FileSystem) {
    assert_eq!(fs.count(), 0);
    assert_eq!(fs.total_size(), 0);
}

#[rstest]
fn nested_size(mut fs: FileSystem) -> anyhow::Result<()> {
    let mut docs = Directory::new("docs");
    docs.add(File::new("b.txt", 5))?;

    fs.add(File::new("a.txt", 10))?;
    fs.add(docs)?;

    assert_eq!(fs.total_size(), 15);

    Ok(())
}

#[rstest]
fn duplicate_add(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(File::new("a.txt", 1))?;

    assert!(matches!(
        fs.add(File::new("a.txt", 1)),
        Err(AddError::DuplicateName { .. })
    ));
    assert_eq!(fs.count(), 1);
    assert_eq!(fs.total_size(), 1);

    Ok(())
}

#[rstest]
fn shallow_lookup(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(Directory::new("docs"))?;

    assert_eq!(fs.get_dir("docs")?.name(), "docs");
    assert!(matches!(
        fs.get_dir("missing"),
        Err(GetError::NotFound { .. })
    ));

    Ok(())
}

#[rstest]
#[case(File::new("n", 3).into())]
#[case(Directory::new("n").into())]
fn duplicate_add_leaves_children_unchanged(mut fs: FileSystem, #[case] node: Node) -> anyhow::Result<()> {
    fs.add(File::new("a", 1))?;
    fs.add(File::new("n", 2))?;
    fs.add(Directory::new("z"))?;

    let before = names(&fs);

    assert!(fs.add(node).is_err());
    assert_eq!(names(&fs), before);
    assert_eq!(fs.total_size(), 3);

    Ok(())
}

#[rstest]
fn remove_miss_is_noop(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(File::new("a", 1))?;

    let before = fs.clone();

    assert!(matches!(
        fs.remove("b"),
        Err(RemoveError::NotFound { .. })
    ));
    assert_eq!(fs, before);

    Ok(())
}

#[rstest]
fn add_remove_round_trip(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(Directory::new("a"))?;
    fs.add(File::new("b", 2))?;
    fs.add(File::new("c", 3))?;

    let before = fs.clone();

    let mut x = Directory::new("x");
    x.add(File::new("inside", 9))?;

    fs.add(x)?;
    let removed = fs.remove("x")?;

    assert_eq!(removed.total_size(), 9);
    assert_eq!(fs, before);

    Ok(())
}

#[rstest]
fn lookup_skips_files(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(File::new("n", 1))?;

    assert!(fs.contains("n"));
    assert!(fs.get_dir("n").is_err());

    Ok(())
}

#[rstest]
fn aggregation_holds_at_every_level(mut fs: FileSystem) -> anyhow::Result<()> {
    let mut cursor = Cursor::new();

    fs.add(File::new("a", 1))?;
    fs.add(Directory::new("d1"))?;
    cursor.enter(&fs, "d1")?;

    let d1 = cursor.resolve_mut(&mut fs)?;
    d1.add(File::new("b", 2))?;
    d1.add(Directory::new("d2"))?;
    d1.add(Directory::new("empty"))?;
    cursor.enter(&fs, "d2")?;

    let d2 = cursor.resolve_mut(&mut fs)?;
    d2.add(File::new("c", 4))?;
    d2.add(File::new("d", 8))?;

    assert_eq!(fs.total_size(), 15);
    assert_aggregates(&fs);

    Ok(())
}

#[rstest]
fn total_size_saturates_instead_of_overflowing(mut fs: FileSystem) -> anyhow::Result<()> {
    fs.add(File::new("a", u64::MAX))?;
    fs.add(File::new("b", 1))?;

    assert_eq!(fs.total_size(), u64::MAX);

    Ok(())
}

#[rstest]
fn display_is_pre_order(mut fs: FileSystem) -> anyhow::Result<()> {
    let mut first = Directory::new("first");
    first.add(File::new("f1", 1))?;

    fs.add(File::new("top", 2))?;
    fs.add(first)?;
    fs.add(Directory::new("second"))?;

    let rendered = fs.root().to_string();
    let lines = rendered.lines().map(str::trim).collect::<Vec<_>>();

    assert_eq!(
        lines,
        [
            "+ Folder: Root",
            "- File: top (2 KB)",
            "+ Folder: first",
            "- File: f1 (1 KB)",
            "+ Folder: second",
        ]
    );

    Ok(())
}
