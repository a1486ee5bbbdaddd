use alloy::sol;

sol! {
    #[sol(rpc)]
    contract DegenGambit {
        function accept() external;
    }
}
