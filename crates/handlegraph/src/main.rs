fn main() -> anyhow::Result<()> {
    handlegraph_lib::main()
}
