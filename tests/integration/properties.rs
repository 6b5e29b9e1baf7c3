use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

use dirstat::core::Dispatcher;
use dirstat::models::{
    AccessError, Entry, EntryKind, ExtensionCountSize, ExtensionLocation, FileDirCount, SortOrder, Visit,
};

const EXTENSIONS: [&str; 5] = ["", ".rs", ".md", ".tar", ".a"];
const DIRS: [&str; 3] = ["root", "root/src", "root/docs"];

#[derive(Debug, Clone)]
enum Step {
    Found(Entry),
    Failed(PathBuf),
}

fn step() -> impl Strategy<Value = Step> {
    (0..EXTENSIONS.len(), 0..DIRS.len(), 0u8..4, 0u64..100_000, any::<u16>()).prop_map(
        |(ext, dir, kind, size, id)| {
            let path = PathBuf::from(DIRS[dir]).join(format!("n{id}{}", EXTENSIONS[ext]));
            match kind {
                0 => Step::Failed(path),
                1 => Step::Found(Entry::new(path, EntryKind::Directory, 0)),
                2 => Step::Found(Entry::new(path, EntryKind::Other, 0)),
                _ => Step::Found(Entry::file(path, size)),
            }
        },
    )
}

fn run(steps: &[Step]) -> (FileDirCount, ExtensionCountSize, ExtensionLocation) {
    let mut fdc = FileDirCount::new();
    let mut ecs = ExtensionCountSize::new();
    let mut el = ExtensionLocation::new();
    {
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .register_collector(&mut fdc)
            .register_collector(&mut ecs)
            .register_collector(&mut el);
        let error = AccessError::new(None, "permission denied");
        for step in steps {
            match step {
                Step::Found(entry) => dispatcher.dispatch(&Visit::entry(entry)),
                Step::Failed(path) => dispatcher.dispatch(&Visit::failed(path, &error)),
            }
        }
    }
    (fdc, ecs, el)
}

proptest! {
    #[test]
    fn buckets_cover_every_accessible_entry(steps in prop::collection::vec(step(), 0..200)) {
        let (fdc, _, _) = run(&steps);
        let failed = steps.iter().filter(|s| matches!(s, Step::Failed(_))).count() as u64;
        prop_assert_eq!(fdc.total(), steps.len() as u64 - failed);
    }

    #[test]
    fn extension_totals_match_regular_files(steps in prop::collection::vec(step(), 0..200)) {
        let (_, ecs, el) = run(&steps);

        let mut expected: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for step in &steps {
            if let Step::Found(entry) = step {
                if entry.kind == EntryKind::File {
                    let ext = dirstat::utils::extension_of(&entry.path);
                    let slot = expected.entry(ext).or_default();
                    slot.0 += 1;
                    slot.1 += entry.size;
                }
            }
        }

        prop_assert_eq!(ecs.len(), expected.len());
        for (ext, (count, size)) in &expected {
            let cs = ecs.get(ext).copied().unwrap_or_default();
            prop_assert_eq!((cs.count, cs.size), (*count, *size));
        }

        let located: u64 = el.sorted().iter().map(|(_, _, cs)| cs.count).sum();
        prop_assert_eq!(located, expected.values().map(|(count, _)| count).sum::<u64>());
    }

    #[test]
    fn count_orders_mirror_each_other(steps in prop::collection::vec(step(), 0..200)) {
        let (_, ecs, _) = run(&steps);
        let desc = ecs.sort_keys(SortOrder::CountDesc);
        let asc = ecs.sort_keys(SortOrder::CountAsc);

        // Group by count: groups appear reversed, members keep key order.
        let group = |keys: &[&str]| -> Vec<(u64, Vec<String>)> {
            let mut groups: Vec<(u64, Vec<String>)> = Vec::new();
            for key in keys {
                let count = ecs.get(key).map_or(0, |cs| cs.count);
                match groups.last_mut() {
                    Some((c, members)) if *c == count => members.push((*key).to_string()),
                    _ => groups.push((count, vec![(*key).to_string()])),
                }
            }
            groups
        };

        let mut desc_groups = group(&desc);
        desc_groups.reverse();
        prop_assert_eq!(desc_groups, group(&asc));
    }
}
