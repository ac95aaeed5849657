use crate::book::AddressBook;
use crate::commands::{help, CmdMessage, CmdResult};
use crate::index::{parse_display_index, ListingView};

pub fn run(book: &mut AddressBook, view: &ListingView, args: &str) -> CmdResult {
    let display_index = match parse_display_index(args) {
        Ok(index) => index,
        Err(_) => {
            return CmdResult::default()
                .with_message(help::invalid_format(help::DELETE.word, &help::DELETE.block()))
        }
    };

    let target = match view.resolve(display_index) {
        Ok(person) => person.clone(),
        Err(_) => {
            return CmdResult::default()
                .with_message(CmdMessage::error("The person index provided is invalid"))
        }
    };

    // The view may be stale: the person could already be gone from the book.
    if !book.remove_exact(&target) {
        return CmdResult::default().with_message(CmdMessage::warning(
            "Person could not be found in address book",
        ));
    }

    CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted Person: {}", target)))
        .with_affected_persons(vec![target])
        .modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{clear, MessageLevel};
    use crate::model::Person;

    fn person(name: &str) -> Person {
        Person::new(name, "123", "a@b.com").unwrap()
    }

    fn setup() -> (AddressBook, ListingView) {
        let persons = vec![person("A"), person("B"), person("C")];
        (
            AddressBook::from_persons(persons.clone()),
            ListingView::new(persons),
        )
    }

    #[test]
    fn deletes_the_person_shown_at_that_index() {
        let (mut book, view) = setup();
        let result = run(&mut book, &view, "2");

        assert!(result.modified);
        assert_eq!(book.persons(), &[person("A"), person("C")]);
        assert_eq!(
            result.messages[0].content,
            "Deleted Person: B  Phone Number: 123  Email: a@b.com"
        );
    }

    #[test]
    fn resolves_against_the_view_not_the_book() {
        let mut book = AddressBook::from_persons(vec![person("A"), person("B"), person("C")]);
        let view = ListingView::new(vec![person("C")]);

        run(&mut book, &view, "1");
        assert_eq!(book.persons(), &[person("A"), person("B")]);
    }

    #[test]
    fn out_of_range_indexes_are_rejected() {
        let (mut book, view) = setup();
        for args in ["0", "4", "-1"] {
            let result = run(&mut book, &view, args);
            assert!(!result.modified);
            assert_eq!(
                result.messages[0].content,
                "The person index provided is invalid"
            );
        }
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn non_numeric_index_is_a_format_error() {
        let (mut book, view) = setup();
        for args in ["", "one", "1.5", "1 2"] {
            let result = run(&mut book, &view, args);
            assert!(!result.modified);
            assert!(result.messages[0]
                .content
                .starts_with("Invalid command format: delete"));
        }
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn each_index_deletes_exactly_once() {
        let (mut book, view) = setup();
        for args in ["1", "2", "3"] {
            assert!(run(&mut book, &view, args).modified);
        }
        assert!(book.is_empty());

        let again = run(&mut book, &view, "1");
        assert!(!again.modified);
    }

    #[test]
    fn stale_view_reports_not_found() {
        let (mut book, view) = setup();
        clear::run(&mut book);

        let result = run(&mut book, &view, "1");
        assert!(!result.modified);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Person could not be found in address book"
        );
        assert!(book.is_empty());
    }
}
