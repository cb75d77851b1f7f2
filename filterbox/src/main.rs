fn main() -> anyhow::Result<()> {
    filterbox::cli_main()
}
