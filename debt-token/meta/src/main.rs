fn main() {
    multiversx_sc_meta_lib::cli_main::<debt_token::AbiProvider>();
}
