use core_logic::ProxyManager;
use std::io::Write;

#[test]
fn loads_lines_skipping_comments_and_blanks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# staging pool").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "1.2.3.4:8080:user:pass").unwrap();
    writeln!(file, "  5.6.7.8:3128  ").unwrap();

    let proxies = ProxyManager::load_from(file.path().to_str().unwrap()).unwrap();

    assert_eq!(proxies, vec!["1.2.3.4:8080:user:pass", "5.6.7.8:3128"]);
}

#[test]
fn missing_file_yields_empty_pool() {
    let proxies = ProxyManager::load_from("no-such-proxies.txt").unwrap();
    assert!(proxies.is_empty());
}
