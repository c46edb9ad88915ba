use mockall::mock;
use skiff_core::core::traits::GprWriteHook;

mock! {
    /// Scripted observer for architectural GPR writes.
    pub Hook {}

    impl GprWriteHook for Hook {
        fn on_gpr_write(&mut self, index: u8, value: u64, pc: u64);
    }
}
