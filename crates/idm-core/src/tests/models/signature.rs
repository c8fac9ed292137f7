use crate::Signature;

use uuid::Uuid;

#[test]
fn test_signature_new() {
    let account_id = Uuid::new_v4();
    let signature = Signature::new(account_id, "signatures/abc123.png");

    assert_eq!(signature.account_id, account_id);
    assert_eq!(signature.image_key, "signatures/abc123.png");
    assert_eq!(signature.created_at, signature.updated_at);
}
