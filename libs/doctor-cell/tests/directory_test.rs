use doctor_cell::models::Speciality;
use doctor_cell::services::directory::DoctorDirectory;

#[test]
fn demo_roster_resolves_known_ids() {
    let directory = DoctorDirectory::with_demo_roster();

    let doctor = directory.resolve("d1").unwrap();
    assert_eq!(doctor.name, "Dr. Aarav Patel");
    assert_eq!(doctor.speciality, Speciality::Cardiologist);
}

#[test]
fn unknown_ids_are_not_found() {
    let directory = DoctorDirectory::with_demo_roster();

    assert!(directory.resolve("d99").is_err());
}

#[test]
fn speciality_filter_matches_roster() {
    let directory = DoctorDirectory::with_demo_roster();

    let neurologists = directory.by_speciality(Speciality::Neurologist);
    assert_eq!(neurologists.len(), 1);
    assert_eq!(neurologists[0].id, "d2");

    assert!(directory.by_speciality(Speciality::Dentist).is_empty());
}
