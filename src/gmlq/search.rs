use crate::config::GmlqConfig;
use crate::directory::{Directory, DirectoryEntry};
use crate::error::Result;
use crate::filter;
use crate::model::ResultRecord;
use log::debug;

const MAIL_ATTR: &str = "mail";
const NAME_ATTR: &str = "cn";
// Job-title attribute used by the directories this tool grew up against.
const TITLE_ATTR: &str = "rhatJobTitle";

/// Run one lookup: build the filter, search the directory, project entries.
///
/// Results keep the order the server returned them in; no client-side
/// sorting. Any connection or search failure ends the lookup — there is no
/// retry.
pub fn run<D: Directory>(
    directory: &mut D,
    config: &GmlqConfig,
    term: &str,
) -> Result<Vec<ResultRecord>> {
    let filter = filter::build(&config.search_attrs, term);
    debug!("searching {} with filter {}", config.search_base, filter);

    let entries = directory.search(&config.search_base, &filter, &config.display_attrs)?;
    debug!("{} entries matched", entries.len());

    Ok(entries.iter().map(project).collect())
}

fn project(entry: &DirectoryEntry) -> ResultRecord {
    ResultRecord {
        mail: entry.first(MAIL_ATTR).unwrap_or_default().to_string(),
        name: entry.first(NAME_ATTR).unwrap_or_default().to_string(),
        title: entry.first(TITLE_ATTR).unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::memory::MemoryDirectory;
    use crate::error::GmlqError;

    fn entry(pairs: &[(&str, &str)]) -> DirectoryEntry {
        let mut entry = DirectoryEntry::default();
        for (attr, value) in pairs {
            entry
                .attrs
                .insert(attr.to_string(), vec![value.to_string()]);
        }
        entry
    }

    fn config() -> GmlqConfig {
        GmlqConfig {
            server: "ldap.example.com".to_string(),
            port: 389,
            search_base: "ou=people,dc=example,dc=com".to_string(),
            search_attrs: vec!["uid".to_string(), "cn".to_string()],
            display_attrs: vec!["mail".to_string(), "cn".to_string()],
        }
    }

    #[test]
    fn projects_entries_into_records() {
        let mut directory = MemoryDirectory::with_entries(vec![entry(&[
            ("mail", "alice@example.com"),
            ("cn", "Alice Liddell"),
            ("rhatJobTitle", "Engineer"),
        ])]);

        let results = run(&mut directory, &config(), "alice").unwrap();
        assert_eq!(
            results,
            vec![ResultRecord {
                mail: "alice@example.com".to_string(),
                name: "Alice Liddell".to_string(),
                title: "Engineer".to_string(),
            }]
        );
    }

    #[test]
    fn missing_attributes_project_to_empty_strings() {
        let mut directory =
            MemoryDirectory::with_entries(vec![entry(&[("mail", "bob@x.com"), ("cn", "Bob")])]);

        let results = run(&mut directory, &config(), "bob").unwrap();
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].mail, "bob@x.com");
    }

    #[test]
    fn preserves_server_order() {
        let mut directory = MemoryDirectory::with_entries(vec![
            entry(&[("cn", "Zed")]),
            entry(&[("cn", "Amy")]),
        ]);

        let results = run(&mut directory, &config(), "a").unwrap();
        assert_eq!(results[0].name, "Zed");
        assert_eq!(results[1].name, "Amy");
    }

    #[test]
    fn identical_invocations_return_identical_results() {
        let mut directory = MemoryDirectory::with_entries(vec![
            entry(&[("mail", "alice@example.com"), ("cn", "Alice")]),
            entry(&[("mail", "bob@example.com"), ("cn", "Bob")]),
        ]);

        let first = run(&mut directory, &config(), "example").unwrap();
        let second = run(&mut directory, &config(), "example").unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].name, "Alice");
        assert_eq!(first[1].name, "Bob");
    }

    #[test]
    fn sends_the_configured_request() {
        let mut directory = MemoryDirectory::new();

        run(&mut directory, &config(), "alice").unwrap();

        let recorded = directory.last_search.as_ref().unwrap();
        assert_eq!(recorded.base, "ou=people,dc=example,dc=com");
        assert_eq!(recorded.filter, "(&(|(uid=*alice*)(cn=*alice*))(mail=*))");
        assert_eq!(recorded.attrs, vec!["mail", "cn"]);
    }

    #[test]
    fn directory_failures_propagate() {
        let cause = ldap3::LdapError::from(std::io::Error::from(
            std::io::ErrorKind::ConnectionReset,
        ));
        let mut directory = MemoryDirectory::failing_with(GmlqError::SearchRejected(cause));

        let err = run(&mut directory, &config(), "alice").unwrap_err();
        assert!(matches!(err, GmlqError::SearchRejected(_)));
    }
}
