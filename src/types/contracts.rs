//! Solidity bindings for the claim contract surface and its two token collaborators.

use alloy::{
    primitives::{B256, b256},
    sol,
};

sol! {
    /// The payout claim contract.
    ///
    /// Events and custom errors share these definitions so that revert data and logs produced by
    /// the engine decode with the same ABI clients use against the deployed contract.
    #[derive(Debug, PartialEq, Eq)]
    contract IPayoutClaim {
        /// Emitted when a Merkle root is published.
        event MerkleRootAdded(bytes32 root);

        /// Emitted when a Merkle root is deprecated.
        event MerkleRootDeprecated(bytes32 root);

        /// Emitted when the fee contract is updated.
        event FeeContractSet(address feeContract);

        /// Emitted when a claim is settled, before the reward is minted.
        event PayoutClaimed(
            bytes32 root,
            uint256 epochId,
            uint256 cost,
            address claimer,
            uint256[] ids,
            uint256[] values
        );

        /// The caller is not the contract owner.
        error NotContractOwner(address account);

        /// The Merkle root is already active.
        error MerkleRootAlreadyExists(bytes32 root);

        /// The Merkle root is not active.
        error MerkleRootDoesNotExist(bytes32 root);

        /// The fee contract address is the zero address.
        error InvalidFeeContractAddress(address feeContract);

        /// The tokens were not received from the configured fee contract.
        error FeeContractMismatch(address received, address expected);

        /// The claim leaf has already been consumed.
        error AlreadyClaimed(address claimer, uint256[] ids, uint256[] values, uint256 cost, uint256 epochId);

        /// The proof does not lead to the root.
        error InvalidProof(address claimer, uint256[] ids, uint256[] values, uint256 cost, uint256 epochId);

        /// The payload states a different cost than was transferred.
        error CostMismatch(uint256 expected, uint256 paid);

        /// The ids and values arrays differ in length.
        error InconsistentArrayLengths();

        /// The transfer data could not be decoded into a claim.
        error InvalidClaimPayload();

        /// Publishes a Merkle root.
        function addMerkleRoot(bytes32 root) external;

        /// Deprecates a Merkle root.
        function deprecateMerkleRoot(bytes32 root) external;

        /// Sets the fee contract.
        function setFeeContract(address feeContract) external;

        /// Whether a root is active.
        function roots(bytes32 root) external view returns (bool);

        /// Whether a leaf has been consumed.
        function claimed(bytes32 leaf) external view returns (bool);

        /// The fee contract.
        function feeContract() external view returns (address);

        /// The reward contract.
        function rewardContract() external view returns (address);

        /// The contract owner.
        function owner() external view returns (address);
    }

    /// Receiver hook invoked by the fee token on `safeTransfer`.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20Receiver {
        function onERC20Received(address operator, address from, uint256 value, bytes calldata data) external returns (bytes4);
    }

    /// The minting surface of the reward token.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC1155Mintable {
        event TransferBatch(address indexed operator, address indexed from, address indexed to, uint256[] ids, uint256[] values);

        /// The account does not hold `role`.
        error NotRoleHolder(bytes32 role, address account);

        /// Tokens cannot be minted to the zero address.
        error ERC1155MintToAddressZero();

        /// Minting `value` of `id` would overflow the recipient's `balance`.
        error ERC1155BalanceOverflow(address recipient, uint256 id, uint256 balance, uint256 value);

        /// The ids and values arrays differ in length.
        error InconsistentArrayLengths();
    }

    /// Transfer data for cost-implicit claims under sorted-pair proofs.
    #[derive(Debug, PartialEq, Eq)]
    struct ClaimPayload {
        bytes32 root;
        uint256 epochId;
        bytes32[] proof;
        uint256[] ids;
        uint256[] values;
    }

    /// Transfer data for cost-checked claims under sorted-pair proofs.
    #[derive(Debug, PartialEq, Eq)]
    struct CostCheckedClaimPayload {
        bytes32 root;
        uint256 epochId;
        bytes32[] proof;
        uint256[] ids;
        uint256[] values;
        uint256 cost;
    }

    /// Transfer data for cost-implicit claims under positional proofs.
    #[derive(Debug, PartialEq, Eq)]
    struct PositionalClaimPayload {
        bytes32 root;
        uint256 epochId;
        bytes32[] proof;
        uint256[] ids;
        uint256[] values;
        uint256 path;
    }

    /// Transfer data for cost-checked claims under positional proofs.
    #[derive(Debug, PartialEq, Eq)]
    struct CostCheckedPositionalClaimPayload {
        bytes32 root;
        uint256 epochId;
        bytes32[] proof;
        uint256[] ids;
        uint256[] values;
        uint256 cost;
        uint256 path;
    }
}

/// Role hash checked by the reward token before minting, `keccak256("MINTER_ROLE")`.
pub const MINTER_ROLE: B256 =
    b256!("9f2df0fed2c77648de5860a4cc508cd0818c85b8b8a1ab4ceeef8d981c8956a6");
