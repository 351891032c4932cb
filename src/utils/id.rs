const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a unique identifier for outgoing requests.
///
/// The identifier is 30 characters long and composed of uppercase English
/// letters (`A-Z`) and digits (`0-9`), generated with the `nanoid` crate. It is
/// used as the `OriginatorConversationID` of B2C requests and the
/// `RequestRefID` of B2B express checkout requests, both of which must be
/// unique per request.
///
/// # Examples
/// ```
/// use mpesa_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 30);
/// ```
#[must_use]
pub fn get_id() -> String {
    nanoid::nanoid!(30, &ALPHABET)
}
