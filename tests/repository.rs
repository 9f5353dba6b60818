use school_directory::domain::school::NewSchool;
use school_directory::domain::types::{
    CityName, ContactNumber, ImagePath, SchoolAddress, SchoolEmail, SchoolId, SchoolName,
    StateName,
};
use school_directory::repository::{
    DieselRepository, SchoolListQuery, SchoolReader, SchoolWriter,
};

mod common;

fn new_school(name: &str, city: &str, contact: &str) -> NewSchool {
    NewSchool::new(
        SchoolName::new(name).unwrap(),
        SchoolAddress::new("Main Road").unwrap(),
        CityName::new(city).unwrap(),
        StateName::new("Uttar Pradesh").unwrap(),
        ContactNumber::new(contact).unwrap(),
        SchoolEmail::new("Office@School.IN").unwrap(),
        ImagePath::new("/schoolImages/1700000000000-front.png").unwrap(),
    )
}

#[test]
fn test_create_and_fetch_school() {
    let test_db = common::TestDb::new("test_create_and_fetch_school.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_school(&new_school("City Montessori", "Lucknow", "0522123456"))
        .unwrap();

    assert_eq!(created.name.as_str(), "City Montessori");
    assert_eq!(created.contact.as_str(), "0522123456");
    assert_eq!(created.email_id.as_str(), "office@school.in");
    assert_eq!(
        created.image.as_str(),
        "/schoolImages/1700000000000-front.png"
    );

    let fetched = repo.get_school_by_id(created.id).unwrap();
    assert_eq!(fetched, Some(created));

    let missing = repo.get_school_by_id(SchoolId::new(999).unwrap()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_identical_submissions_create_separate_rows() {
    let test_db = common::TestDb::new("test_identical_submissions.db");
    let repo = DieselRepository::new(test_db.pool());
    let school = new_school("Amity", "Noida", "9876543210");

    let first = repo.create_school(&school).unwrap();
    let second = repo.create_school(&school).unwrap();

    assert_ne!(first.id, second.id);
    let (total, _) = repo.list_schools(SchoolListQuery::new()).unwrap();
    assert_eq!(total, 2);
}

#[test]
fn test_list_schools_search_and_pagination() {
    let test_db = common::TestDb::new("test_list_schools_search.db");
    let repo = DieselRepository::new(test_db.pool());

    for (name, city) in [
        ("La Martiniere", "Lucknow"),
        ("Lucknow Public School", "Lucknow"),
        ("Fortune World School", "Noida"),
        ("Pathways", "Gurgaon"),
        ("100% Results_Academy", "Agra"),
    ] {
        repo.create_school(&new_school(name, city, "1234567890"))
            .unwrap();
    }

    let (total, all) = repo.list_schools(SchoolListQuery::new()).unwrap();
    assert_eq!(total, 5);
    assert_eq!(all.len(), 5);

    let (total, found) = repo
        .list_schools(SchoolListQuery::new().search("LUCKNOW"))
        .unwrap();
    assert_eq!(total, 2);
    assert!(found.iter().all(|s| s.city.as_str() == "Lucknow"));

    let (total, found) = repo
        .list_schools(SchoolListQuery::new().search("world"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(found[0].name.as_str(), "Fortune World School");

    // Wildcards in the term match literally.
    let (total, _) = repo
        .list_schools(SchoolListQuery::new().search("%"))
        .unwrap();
    assert_eq!(total, 1);
    let (total, _) = repo
        .list_schools(SchoolListQuery::new().search("s_A"))
        .unwrap();
    assert_eq!(total, 1);

    let (total, page) = repo
        .list_schools(SchoolListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name.as_str(), "Fortune World School");
}

#[test]
fn test_contact_keeps_leading_zeros() {
    let test_db = common::TestDb::new("test_contact_keeps_leading_zeros.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_school(&new_school("Zero School", "Delhi", "0000000001"))
        .unwrap();
    let fetched = repo.get_school_by_id(created.id).unwrap().unwrap();

    assert_eq!(fetched.contact.as_str(), "0000000001");
}
