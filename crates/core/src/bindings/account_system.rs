use alloy::sol;

sol! {
    #[sol(rpc)]
    contract AccountSystem7702 {
        #[derive(Debug, PartialEq, Eq)]
        struct Action {
            address target;
            bytes data;
            uint256 value;
            uint256 nonce;
            uint256 expiration;
            address feeToken;
            uint256 feeValue;
            bool isBasisPoints;
        }

        function nonce() external view returns(uint256 nonce);
        function execute(Action[] calldata actions, bytes[] calldata signatures) external payable;
    }
}
