use std::io::Write;

use friendly::{
    concurrent_friendly_count, friendly_count, group_by_length, is_friendly, load_word_list,
    run_all_buckets_parallel,
};

const DEMO: [&str; 13] = [
    "LALALA", "XOXOXO", "GCGCGC", "HHHCCC", "BBBMMM", "EGONUH", "HHRGOE", "XOXO", "JUJU", "JKKK",
    "J", "", "",
];

#[test]
fn both_entry_points_agree_on_demo_list() {
    assert_eq!(friendly_count(&DEMO), 7);
    assert_eq!(concurrent_friendly_count(DEMO.to_vec()).unwrap(), 7);
}

#[test]
fn demo_list_has_four_buckets() {
    let lens: Vec<usize> = group_by_length(DEMO.to_vec()).iter().map(|b| b.len).collect();
    assert_eq!(lens, vec![0, 1, 4, 6]);
}

#[test]
fn loaded_file_counts_like_in_memory_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", DEMO.join("\n")).unwrap();

    let words = load_word_list(file.path()).unwrap();
    // the trailing newline adds one more empty word
    assert_eq!(words.len(), DEMO.len() + 1);
    assert_eq!(words.last().unwrap(), b"");

    assert_eq!(friendly_count(&words), 7);
    assert_eq!(concurrent_friendly_count(words).unwrap(), 7);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = load_word_list(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));
}

#[test]
fn mixed_string_types() {
    assert!(is_friendly(b"HOHO", "BIBI".as_bytes()));
    let owned: Vec<String> = vec!["HOHO".into(), "BIBI".into(), "HOHOH".into()];
    assert_eq!(friendly_count(&owned), 2);
    assert_eq!(concurrent_friendly_count(owned).unwrap(), 2);
}

#[test]
fn larger_list_matches_sequential() {
    // every 3-letter word over {a,b,c}: 27 words, all of length 3
    let alphabet = [b'a', b'b', b'c'];
    let mut words = Vec::new();
    for &x in &alphabet {
        for &y in &alphabet {
            for &z in &alphabet {
                words.push(vec![x, y, z]);
            }
        }
    }
    words.push(b"abcd".to_vec());
    words.push(b"dcba".to_vec());

    let seq = friendly_count(&words);
    let report = run_all_buckets_parallel(group_by_length(words), false).unwrap();
    assert_eq!(report.total, seq);
    assert_eq!(report.buckets.len(), 2);
    assert_eq!(report.buckets[1].friendly, 2);
}
