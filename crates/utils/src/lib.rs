use rand::Rng;

/// Generates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::thread_rng();
    (0..secret_len)
        .map(|_| {
            let pos = rng.gen_range(0..CHARSET.len());
            CHARSET[pos] as char
        })
        .collect()
}
