//! Shared record fixtures for engine tests.

use crate::browse::Browser;

///
/// Member
/// Roster-style test record with a searchable name and filterable
/// attributes.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Member {
    pub(crate) first_name: String,
    pub(crate) gender: Gender,
    pub(crate) age: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Gender {
    Female,
    Male,
}

pub(crate) fn member(first_name: &str, gender: Gender, age: u32) -> Member {
    Member {
        first_name: first_name.to_string(),
        gender,
        age,
    }
}

pub(crate) fn first_name(member: &Member) -> &str {
    &member.first_name
}

/// Twelve members with varied names, genders, and ages.
pub(crate) fn roster() -> Vec<Member> {
    vec![
        member("John", Gender::Male, 34),
        member("Joan", Gender::Female, 52),
        member("Jane", Gender::Female, 19),
        member("Jonas", Gender::Male, 61),
        member("Mary", Gender::Female, 28),
        member("Mark", Gender::Male, 17),
        member("Lena", Gender::Female, 44),
        member("Liam", Gender::Male, 39),
        member("Nina", Gender::Female, 23),
        member("Noah", Gender::Male, 71),
        member("Olga", Gender::Female, 36),
        member("Omar", Gender::Male, 25),
    ]
}

/// Engine over [`roster`] records with the standard filter modes.
pub(crate) fn member_browser(page_size: u32) -> Browser<Member> {
    Browser::new(first_name, page_size)
        .and_then(|browser| browser.filter("male", |m| matches!(m.gender, Gender::Male)))
        .and_then(|browser| browser.filter("female", |m| matches!(m.gender, Gender::Female)))
        .and_then(|browser| browser.filter("under-40", |m| m.age < 40))
        .and_then(|browser| browser.filter("under-20", |m| m.age < 20))
        .and_then(|browser| {
            browser.filter("male-under-40", |m| {
                m.age < 40 && matches!(m.gender, Gender::Male)
            })
        })
        .expect("fixture selectors are unique and page size is non-zero")
}
