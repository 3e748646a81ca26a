use access_rights::{convert_from_bits, AccessRights};

#[test]
fn serializes_as_bare_integer() {
    let json = serde_json::to_string(&(AccessRights::READ | AccessRights::WRITE)).unwrap();
    assert_eq!(json, "3");
    assert_eq!(serde_json::to_string(&AccessRights::NONE).unwrap(), "0");
    assert_eq!(serde_json::to_string(&AccessRights::FULL).unwrap(), "7");
}

#[test]
fn deserializes_integer_verbatim() {
    let rights: AccessRights = serde_json::from_str("6").unwrap();
    assert_eq!(rights, AccessRights::WRITE | AccessRights::EXECUTE);

    // Unnamed bits survive the same way they do through convert_from_bits.
    let wide: AccessRights = serde_json::from_str("264").unwrap();
    assert_eq!(wide, convert_from_bits(264));
    assert_eq!(serde_json::to_string(&wide).unwrap(), "264");
}

#[test]
fn rejects_non_integer_input() {
    assert!(serde_json::from_str::<AccessRights>("-1").is_err());
    assert!(serde_json::from_str::<AccessRights>("\"Read\"").is_err());
}

#[test]
fn embeds_in_a_struct() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Grant {
        holder: String,
        rights: AccessRights,
    }

    let grant = Grant { holder: "alice".to_string(), rights: AccessRights::READ | AccessRights::EXECUTE };
    let json = serde_json::to_string(&grant).unwrap();
    assert_eq!(json, r#"{"holder":"alice","rights":5}"#);
    assert_eq!(serde_json::from_str::<Grant>(&json).unwrap(), grant);
}
