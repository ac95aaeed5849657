use crate::book::AddressBook;
use crate::codec;
use crate::commands::{help, CmdMessage, CmdResult};

pub fn run(book: &mut AddressBook, args: &str) -> CmdResult {
    let person = match codec::decode(args) {
        Ok(person) => person,
        Err(_) => {
            return CmdResult::default()
                .with_message(help::invalid_format(help::ADD.word, &help::ADD.block()))
        }
    };

    book.append(person.clone());
    CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New person added: {}, Phone: {}, Email: {}",
            person.name(),
            person.phone(),
            person.email()
        )))
        .with_affected_persons(vec![person])
        .modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;

    #[test]
    fn appends_decoded_person() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "John Doe p/98765432 e/johnd@gmail.com");

        let john = Person::new("John Doe", "98765432", "johnd@gmail.com").unwrap();
        assert!(result.modified);
        assert_eq!(book.persons(), &[john.clone()]);
        assert_eq!(result.affected_persons, vec![john]);
        assert_eq!(
            result.messages[0].content,
            "New person added: John Doe, Phone: 98765432, Email: johnd@gmail.com"
        );
    }

    #[test]
    fn accepts_tags_in_either_order() {
        let mut book = AddressBook::new();
        run(&mut book, "Bob e/a@b.com p/123");
        assert_eq!(book.persons()[0].phone(), "123");
    }

    #[test]
    fn malformed_arguments_leave_book_untouched() {
        let mut book = AddressBook::new();
        for args in ["", "Bob", "Bob p/abc e/a@b.com", "Bob p/123 e/bad", "p/123 e/a@b.com"] {
            let result = run(&mut book, args);
            assert!(!result.modified, "{args:?} should not modify");
            assert!(result.messages[0]
                .content
                .starts_with("Invalid command format: add"));
        }
        assert!(book.is_empty());
    }
}
