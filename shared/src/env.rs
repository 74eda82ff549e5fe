/// Loads variables from a `.env` file in the working directory, if any.
pub fn init() {
    dotenv::dotenv().ok();
}
